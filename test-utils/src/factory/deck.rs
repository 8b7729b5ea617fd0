//! Deck factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DeckFactory<'a> {
    db: &'a DatabaseConnection,
    agent_id: String,
    name: String,
    card_ids: Vec<String>,
    is_active: bool,
}

impl<'a> DeckFactory<'a> {
    /// Defaults: `"Deck {id}"`, empty, inactive.
    pub fn new(db: &'a DatabaseConnection, agent_id: impl Into<String>) -> Self {
        Self {
            db,
            agent_id: agent_id.into(),
            name: format!("Deck {}", next_id()),
            card_ids: Vec::new(),
            is_active: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn card_ids(mut self, card_ids: Vec<String>) -> Self {
        self.card_ids = card_ids;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::deck::Model, DbErr> {
        let now = Utc::now();
        entity::deck::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            agent_id: ActiveValue::Set(self.agent_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(String::new()),
            card_ids: ActiveValue::Set(serde_json::json!(self.card_ids)),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty inactive deck for the agent.
pub async fn create_deck(
    db: &DatabaseConnection,
    agent_id: &str,
) -> Result<entity::deck::Model, DbErr> {
    DeckFactory::new(db, agent_id).build().await
}
