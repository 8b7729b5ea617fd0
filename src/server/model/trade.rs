use chrono::{DateTime, Utc};

use crate::{model::trade::TradeHistoryEntryDto, server::error::AppError};

string_enum! {
    pub enum TradeStatus {
        Pending => "pending",
        Accepted => "accepted",
        Declined => "declined",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub id: String,
    pub from_agent_id: String,
    pub to_agent_id: String,
    pub offered_card_ids: Vec<String>,
    pub wanted_card_ids: Vec<String>,
    pub status: TradeStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Trade {
    pub fn from_entity(entity: entity::trade::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            from_agent_id: entity.from_agent_id,
            to_agent_id: entity.to_agent_id,
            offered_card_ids: card_ids_from_json(entity.offered_card_ids)?,
            wanted_card_ids: card_ids_from_json(entity.wanted_card_ids)?,
            status: TradeStatus::from_stored(&entity.status)?,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
        })
    }
}

/// Decodes a JSON array of card IDs stored in a JSON column.
pub fn card_ids_from_json(value: serde_json::Value) -> Result<Vec<String>, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::InternalError(format!("Malformed card ID list: {}", e)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeHistoryEntry {
    pub trade: Trade,
    pub from_agent_name: String,
    pub to_agent_name: String,
}

impl TradeHistoryEntry {
    pub fn into_dto(self) -> TradeHistoryEntryDto {
        TradeHistoryEntryDto {
            id: self.trade.id,
            from_agent_id: self.trade.from_agent_id,
            from_agent_name: self.from_agent_name,
            to_agent_id: self.trade.to_agent_id,
            to_agent_name: self.to_agent_name,
            offered_card_ids: self.trade.offered_card_ids,
            wanted_card_ids: self.trade.wanted_card_ids,
            status: self.trade.status.as_str().to_string(),
            created_at: self.trade.created_at,
            resolved_at: self.trade.resolved_at,
        }
    }
}
