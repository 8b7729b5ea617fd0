//! Database repository layer for all game entities.
//!
//! Repositories wrap SeaORM queries for one table (or one read model, such as the
//! leaderboard) and convert entity models into domain models at the boundary. Every
//! repository is generic over `ConnectionTrait` so services can run several of them
//! inside one `DatabaseTransaction`.

pub mod achievement;
pub mod admin_key;
pub mod agent;
pub mod agent_stats;
pub mod battle;
pub mod card;
pub mod card_template;
pub mod deck;
pub mod friend;
pub mod leaderboard;
pub mod message;
pub mod notification;
pub mod pack;
pub mod quest;
pub mod trade;

#[cfg(test)]
mod test;
