//! Deck data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::deck::Deck};

pub struct DeckRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeckRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an empty, inactive deck.
    pub async fn create(
        &self,
        agent_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Deck, AppError> {
        let now = Utc::now();
        let entity = entity::deck::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            agent_id: ActiveValue::Set(agent_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            card_ids: ActiveValue::Set(serde_json::json!([])),
            is_active: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Deck::from_entity(entity)
    }

    pub async fn count_by_agent(&self, agent_id: &str) -> Result<u64, AppError> {
        let count = entity::prelude::Deck::find()
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Finds a deck only if it belongs to the agent.
    pub async fn find_for_agent(
        &self,
        deck_id: &str,
        agent_id: &str,
    ) -> Result<Option<Deck>, AppError> {
        let entity = entity::prelude::Deck::find_by_id(deck_id.to_string())
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .one(self.db)
            .await?;

        entity.map(Deck::from_entity).transpose()
    }

    /// Replaces the deck's card list.
    pub async fn set_cards(&self, deck_id: &str, card_ids: &[String]) -> Result<(), AppError> {
        entity::prelude::Deck::update_many()
            .col_expr(
                entity::deck::Column::CardIds,
                Expr::value(serde_json::json!(card_ids)),
            )
            .col_expr(entity::deck::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::deck::Column::Id.eq(deck_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, deck_id: &str, agent_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Deck::delete_many()
            .filter(entity::deck::Column::Id.eq(deck_id))
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the agent's decks, newest first.
    pub async fn get_by_agent(&self, agent_id: &str) -> Result<Vec<Deck>, AppError> {
        let entities = entity::prelude::Deck::find()
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .order_by_desc(entity::deck::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Deck::from_entity).collect()
    }

    /// Makes `deck_id` the agent's only active deck.
    ///
    /// Run inside a transaction; the two updates are not atomic on their own.
    pub async fn set_active(&self, deck_id: &str, agent_id: &str) -> Result<(), AppError> {
        entity::prelude::Deck::update_many()
            .col_expr(entity::deck::Column::IsActive, Expr::value(false))
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        entity::prelude::Deck::update_many()
            .col_expr(entity::deck::Column::IsActive, Expr::value(true))
            .filter(entity::deck::Column::Id.eq(deck_id))
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_active(&self, agent_id: &str) -> Result<Option<Deck>, AppError> {
        let entity = entity::prelude::Deck::find()
            .filter(entity::deck::Column::AgentId.eq(agent_id))
            .filter(entity::deck::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        entity.map(Deck::from_entity).transpose()
    }
}
