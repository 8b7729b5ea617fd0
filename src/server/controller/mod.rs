//! HTTP handlers for every `/api` endpoint.
//!
//! Handlers resolve the caller through the guards in `middleware::auth`, call one service
//! and convert the returned domain model into a DTO wrapped in `ApiResponse`.

pub mod achievement;
pub mod admin;
pub mod battle;
pub mod card;
pub mod deck;
pub mod friend;
pub mod health;
pub mod leaderboard;
pub mod message;
pub mod notification;
pub mod pack;
pub mod profile;
pub mod quest;
pub mod trade;
