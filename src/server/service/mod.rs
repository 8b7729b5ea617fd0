//! Service layer for game rules and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce ownership and
//! state checks, open a transaction whenever an operation changes more than one row, and
//! fan out the non-critical follow-ups (notifications, quest progress, achievement checks)
//! after the main change has committed. Follow-up failures are logged, never returned.

pub mod achievement;
pub mod admin;
pub mod agent;
pub mod battle;
pub mod card;
pub mod deck;
pub mod friend;
pub mod leaderboard;
pub mod message;
pub mod notification;
pub mod pack;
pub mod profile;
pub mod quest;
pub mod reward;
pub mod trade;

/// Upper bound on caller-supplied page sizes.
pub const MAX_PAGE_SIZE: u64 = 100;
