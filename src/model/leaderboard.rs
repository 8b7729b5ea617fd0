use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    /// `elo` (default), `wins` or `cards`.
    pub sort_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: u32,
    pub agent_id: String,
    pub name: String,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub card_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardDto {
    pub sort_by: String,
    pub leaderboard: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklyRewardDto {
    pub agent_id: String,
    pub name: String,
    pub rank: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeeklyRewardsDto {
    pub rewards_given: usize,
    pub rewards: Vec<WeeklyRewardDto>,
}
