//! Trade data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::trade::{Trade, TradeStatus},
};

pub struct TradeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TradeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending trade offer.
    ///
    /// # Arguments
    /// - `from_agent_id` - Agent making the offer
    /// - `to_agent_id` - Agent receiving the offer
    /// - `offered` - Card IDs the requester gives
    /// - `wanted` - Card IDs the requester asks for, may be empty
    pub async fn create(
        &self,
        from_agent_id: &str,
        to_agent_id: &str,
        offered: &[String],
        wanted: &[String],
    ) -> Result<Trade, AppError> {
        let entity = entity::trade::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            from_agent_id: ActiveValue::Set(from_agent_id.to_string()),
            to_agent_id: ActiveValue::Set(to_agent_id.to_string()),
            offered_card_ids: ActiveValue::Set(serde_json::json!(offered)),
            wanted_card_ids: ActiveValue::Set(serde_json::json!(wanted)),
            status: ActiveValue::Set(TradeStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Trade::from_entity(entity)
    }

    /// Finds a pending trade addressed to `agent_id`.
    pub async fn find_pending_for_recipient(
        &self,
        trade_id: &str,
        agent_id: &str,
    ) -> Result<Option<Trade>, AppError> {
        let entity = entity::prelude::Trade::find_by_id(trade_id.to_string())
            .filter(entity::trade::Column::ToAgentId.eq(agent_id))
            .filter(entity::trade::Column::Status.eq(TradeStatus::Pending.as_str()))
            .one(self.db)
            .await?;

        entity.map(Trade::from_entity).transpose()
    }

    /// Moves a pending trade addressed to `agent_id` to `status`.
    ///
    /// # Returns
    /// - `Ok(true)` - Trade resolved by this call
    /// - `Ok(false)` - No pending trade with that ID addressed to the agent
    pub async fn resolve(
        &self,
        trade_id: &str,
        agent_id: &str,
        status: TradeStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Trade::update_many()
            .col_expr(entity::trade::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::trade::Column::ResolvedAt, Expr::value(Utc::now()))
            .filter(entity::trade::Column::Id.eq(trade_id))
            .filter(entity::trade::Column::ToAgentId.eq(agent_id))
            .filter(entity::trade::Column::Status.eq(TradeStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets resolved trades on either side, most recently resolved first.
    pub async fn get_resolved_for_agent(
        &self,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<Trade>, AppError> {
        let entities = entity::prelude::Trade::find()
            .filter(
                Condition::any()
                    .add(entity::trade::Column::FromAgentId.eq(agent_id))
                    .add(entity::trade::Column::ToAgentId.eq(agent_id)),
            )
            .filter(entity::trade::Column::Status.ne(TradeStatus::Pending.as_str()))
            .order_by_desc(entity::trade::Column::ResolvedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Trade::from_entity).collect()
    }
}
