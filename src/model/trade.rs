use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTradeDto {
    /// Moltbook ID of the agent receiving the offer.
    pub to_agent: String,
    pub offer: Vec<String>,
    #[serde(default)]
    pub want: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TradeCreatedDto {
    pub trade_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TradeHistoryEntryDto {
    pub id: String,
    pub from_agent_id: String,
    pub from_agent_name: String,
    pub to_agent_id: String,
    pub to_agent_name: String,
    pub offered_card_ids: Vec<String>,
    pub wanted_card_ids: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TradeHistoryDto {
    pub trades: Vec<TradeHistoryEntryDto>,
    pub count: usize,
}
