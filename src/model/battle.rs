use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChallengeBattleDto {
    /// Moltbook ID of the agent being challenged.
    pub opponent_id: String,
    pub card_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AcceptBattleDto {
    pub card_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BattleCreatedDto {
    pub battle_id: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BattleSideDto {
    pub name: String,
    pub card: String,
    pub power: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BattleResultDto {
    pub id: String,
    pub challenger: BattleSideDto,
    pub defender: BattleSideDto,
    /// Winning agent ID, or `"draw"`.
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PackRewardDto {
    pub awarded: bool,
    pub pack_type: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BattleAcceptedDto {
    pub battle: BattleResultDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_reward: Option<PackRewardDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BattleHistoryEntryDto {
    pub id: String,
    pub challenger_id: String,
    pub challenger_name: String,
    pub defender_id: String,
    pub defender_name: String,
    pub challenger_card_name: String,
    pub defender_card_name: Option<String>,
    pub challenger_power: Option<i32>,
    pub defender_power: Option<i32>,
    pub winner_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BattleHistoryDto {
    pub battles: Vec<BattleHistoryEntryDto>,
    pub count: usize,
}
