//! Wire DTOs shared by every API endpoint.

pub mod achievement;
pub mod admin;
pub mod agent;
pub mod api;
pub mod battle;
pub mod card;
pub mod deck;
pub mod friend;
pub mod leaderboard;
pub mod message;
pub mod notification;
pub mod pack;
pub mod quest;
pub mod trade;
