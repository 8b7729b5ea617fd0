use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GrantPackDto {
    /// Moltbook ID of the receiving agent.
    pub agent_id: String,
    pub pack_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PackGrantedDto {
    pub pack_id: String,
    pub agent_id: String,
    pub pack_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetQuestsDto {
    /// `daily` or `weekly`.
    pub quest_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestsResetDto {
    pub quest_type: String,
    pub reset: u64,
}
