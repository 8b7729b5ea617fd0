//! Trade factory.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TradeFactory<'a> {
    db: &'a DatabaseConnection,
    from_agent_id: String,
    to_agent_id: String,
    offered: Vec<String>,
    wanted: Vec<String>,
    status: String,
    resolved_at: Option<DateTime<Utc>>,
}

impl<'a> TradeFactory<'a> {
    /// Defaults to a `"pending"` trade with empty card lists.
    pub fn new(
        db: &'a DatabaseConnection,
        from_agent_id: impl Into<String>,
        to_agent_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            from_agent_id: from_agent_id.into(),
            to_agent_id: to_agent_id.into(),
            offered: Vec::new(),
            wanted: Vec::new(),
            status: "pending".to_string(),
            resolved_at: None,
        }
    }

    pub fn offered(mut self, card_ids: Vec<String>) -> Self {
        self.offered = card_ids;
        self
    }

    pub fn wanted(mut self, card_ids: Vec<String>) -> Self {
        self.wanted = card_ids;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Non-pending trades without an explicit time are stamped with the insert time.
    pub fn resolved_at(mut self, resolved_at: DateTime<Utc>) -> Self {
        self.resolved_at = Some(resolved_at);
        self
    }

    pub async fn build(self) -> Result<entity::trade::Model, DbErr> {
        let resolved_at = self
            .resolved_at
            .or_else(|| (self.status != "pending").then(Utc::now));
        entity::trade::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            from_agent_id: ActiveValue::Set(self.from_agent_id),
            to_agent_id: ActiveValue::Set(self.to_agent_id),
            offered_card_ids: ActiveValue::Set(serde_json::json!(self.offered)),
            wanted_card_ids: ActiveValue::Set(serde_json::json!(self.wanted)),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(resolved_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending trade of the given card lists.
pub async fn create_trade(
    db: &DatabaseConnection,
    from_agent_id: &str,
    to_agent_id: &str,
    offered: Vec<String>,
    wanted: Vec<String>,
) -> Result<entity::trade::Model, DbErr> {
    TradeFactory::new(db, from_agent_id, to_agent_id)
        .offered(offered)
        .wanted(wanted)
        .build()
        .await
}
