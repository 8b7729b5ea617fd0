use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::achievement::RewardDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quest_type: String,
    pub goal: String,
    pub target: i32,
    pub reward: RewardDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AgentQuestDto {
    pub agent_quest_id: String,
    pub quest: QuestDto,
    pub progress: i32,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestsDto {
    pub quests: Vec<QuestDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AgentQuestsDto {
    pub quests: Vec<AgentQuestDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestStartedDto {
    pub agent_quest_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestCompletedDto {
    pub quest: String,
    pub reward: RewardDto,
}
