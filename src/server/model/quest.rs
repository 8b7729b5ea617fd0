//! Quest definitions and per-agent quest progress.

use chrono::{DateTime, Utc};

use crate::{
    model::quest::{AgentQuestDto, QuestDto},
    server::{
        error::AppError,
        model::{pack::PackType, reward::Reward},
    },
};

string_enum! {
    pub enum QuestType {
        Daily => "daily",
        Weekly => "weekly",
    }
}

string_enum! {
    pub enum QuestGoal {
        BattlesCompleted => "battles_completed",
        BattlesWon => "battles_won",
        PacksOpened => "packs_opened",
        TradesCompleted => "trades_completed",
    }
}

string_enum! {
    pub enum AgentQuestStatus {
        InProgress => "in_progress",
        Completed => "completed",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub quest_type: QuestType,
    pub goal: QuestGoal,
    pub target: i32,
    pub reward: Reward,
}

pub const QUESTS: &[QuestDefinition] = &[
    QuestDefinition {
        name: "Daily Battler",
        description: "Complete 3 battles today",
        quest_type: QuestType::Daily,
        goal: QuestGoal::BattlesCompleted,
        target: 3,
        reward: Reward::Pack(PackType::Standard),
    },
    QuestDefinition {
        name: "Daily Opener",
        description: "Open a pack today",
        quest_type: QuestType::Daily,
        goal: QuestGoal::PacksOpened,
        target: 1,
        reward: Reward::Karma(10),
    },
    QuestDefinition {
        name: "Daily Trading",
        description: "Complete a trade today",
        quest_type: QuestType::Daily,
        goal: QuestGoal::TradesCompleted,
        target: 1,
        reward: Reward::Pack(PackType::Standard),
    },
    QuestDefinition {
        name: "Weekly Champion",
        description: "Win 10 battles this week",
        quest_type: QuestType::Weekly,
        goal: QuestGoal::BattlesWon,
        target: 10,
        reward: Reward::Pack(PackType::Premium),
    },
    QuestDefinition {
        name: "Weekly Trader",
        description: "Complete 5 trades this week",
        quest_type: QuestType::Weekly,
        goal: QuestGoal::TradesCompleted,
        target: 5,
        reward: Reward::Pack(PackType::Premium),
    },
    QuestDefinition {
        name: "Weekly Collector",
        description: "Open 7 packs this week",
        quest_type: QuestType::Weekly,
        goal: QuestGoal::PacksOpened,
        target: 7,
        reward: Reward::Pack(PackType::Legendary),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quest_type: QuestType,
    pub goal: QuestGoal,
    pub target: i32,
    pub reward: Reward,
}

impl Quest {
    pub fn from_entity(entity: entity::quest::Model) -> Result<Self, AppError> {
        Ok(Self {
            reward: Reward::from_columns(
                &entity.reward_kind,
                entity.reward_pack_type.as_deref(),
                entity.reward_amount,
            )?,
            id: entity.id,
            name: entity.name,
            description: entity.description,
            quest_type: QuestType::from_stored(&entity.quest_type)?,
            goal: QuestGoal::from_stored(&entity.goal)?,
            target: entity.target,
        })
    }

    pub fn into_dto(self) -> QuestDto {
        QuestDto {
            id: self.id,
            name: self.name,
            description: self.description,
            quest_type: self.quest_type.as_str().to_string(),
            goal: self.goal.as_str().to_string(),
            target: self.target,
            reward: self.reward.into_dto(),
        }
    }
}

/// An agent's progress on a started quest.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentQuest {
    pub id: String,
    pub agent_id: String,
    pub quest: Quest,
    pub progress: i32,
    pub status: AgentQuestStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl AgentQuest {
    pub fn from_entity(
        entity: entity::agent_quest::Model,
        quest: Quest,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            agent_id: entity.agent_id,
            quest,
            progress: entity.progress,
            status: AgentQuestStatus::from_stored(&entity.status)?,
            started_at: entity.started_at,
            completed_at: entity.completed_at,
        })
    }

    pub fn target_reached(&self) -> bool {
        self.progress >= self.quest.target
    }

    pub fn into_dto(self) -> AgentQuestDto {
        AgentQuestDto {
            agent_quest_id: self.id,
            quest: self.quest.into_dto(),
            progress: self.progress,
            status: self.status.as_str().to_string(),
            started_at: self.started_at,
            completed_at: self.completed_at,
        }
    }
}
