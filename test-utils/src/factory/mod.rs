//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` shorthand for quick default creation. Factories never create their
//! parents implicitly; pass the owning agent or template explicitly, or use the
//! `helpers` module to build a whole chain.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let agent = factory::create_agent(&db).await?;
//! let (template, card) = factory::helpers::create_card_for_agent(&db, &agent.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let agent = factory::agent::AgentFactory::new(&db)
//!     .moltbook_id("mb_custom")
//!     .name("Custom")
//!     .elo(1200)
//!     .build()
//!     .await?;
//! ```

pub mod agent;
pub mod battle;
pub mod card;
pub mod card_template;
pub mod deck;
pub mod friend;
pub mod helpers;
pub mod message;
pub mod notification;
pub mod pack;
pub mod quest;
pub mod trade;

pub use agent::create_agent;
pub use battle::create_battle;
pub use card::create_card;
pub use card_template::create_card_template;
pub use deck::create_deck;
pub use friend::create_friendship;
pub use message::create_message;
pub use notification::create_notification;
pub use pack::create_pack;
pub use quest::create_quest;
pub use trade::create_trade;
