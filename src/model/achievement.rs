use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Reward granted by an achievement or quest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RewardDto {
    /// `pack` or `karma`.
    pub kind: String,
    pub pack_type: Option<String>,
    pub amount: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AchievementDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub requirement: String,
    pub target: i32,
    pub reward: RewardDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EarnedAchievementDto {
    #[serde(flatten)]
    pub achievement: AchievementDto,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementsDto {
    pub achievements: Vec<AchievementDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EarnedAchievementsDto {
    pub achievements: Vec<EarnedAchievementDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AchievementCheckDto {
    pub unlocked: Vec<String>,
    pub count: usize,
}
