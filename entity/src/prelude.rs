pub use super::achievement::Entity as Achievement;
pub use super::admin_key::Entity as AdminKey;
pub use super::agent::Entity as Agent;
pub use super::agent_achievement::Entity as AgentAchievement;
pub use super::agent_quest::Entity as AgentQuest;
pub use super::agent_stats::Entity as AgentStats;
pub use super::battle::Entity as Battle;
pub use super::card::Entity as Card;
pub use super::card_template::Entity as CardTemplate;
pub use super::deck::Entity as Deck;
pub use super::friend::Entity as Friend;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::pack::Entity as Pack;
pub use super::quest::Entity as Quest;
pub use super::trade::Entity as Trade;
