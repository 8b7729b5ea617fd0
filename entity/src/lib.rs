//! SeaORM entity models for the Moltimon database schema.

pub mod prelude;

pub mod achievement;
pub mod admin_key;
pub mod agent;
pub mod agent_achievement;
pub mod agent_quest;
pub mod agent_stats;
pub mod battle;
pub mod card;
pub mod card_template;
pub mod deck;
pub mod friend;
pub mod message;
pub mod notification;
pub mod pack;
pub mod quest;
pub mod trade;
