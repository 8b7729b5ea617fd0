use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgentProfileDto {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub karma: i32,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub packs_opened: i32,
    /// Live count of cards currently owned.
    pub cards_collected: u64,
    pub friend_count: u64,
    pub trades_completed: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub profile: AgentProfileDto,
}
