//! Achievement definitions and unlock rules.

use chrono::{DateTime, Utc};

use crate::{
    model::achievement::{AchievementDto, EarnedAchievementDto},
    server::{
        error::AppError,
        model::{pack::PackType, reward::Reward},
    },
};

string_enum! {
    pub enum AchievementCategory {
        Battle => "battle",
        Collection => "collection",
        Social => "social",
        Trading => "trading",
    }
}

string_enum! {
    pub enum AchievementRequirement {
        BattlesCompleted => "battles_completed",
        Wins => "wins",
        CardsCollected => "cards_collected",
        FriendsMade => "friends_made",
        TradesCompleted => "trades_completed",
    }
}

/// A predefined achievement inserted by `AchievementService::init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub requirement: AchievementRequirement,
    pub target: i32,
    pub reward: Reward,
}

pub const ACHIEVEMENTS: &[AchievementDefinition] = &[
    AchievementDefinition {
        name: "First Battle",
        description: "Complete your first battle",
        category: AchievementCategory::Battle,
        requirement: AchievementRequirement::BattlesCompleted,
        target: 1,
        reward: Reward::Pack(PackType::Standard),
    },
    AchievementDefinition {
        name: "Battle Master",
        description: "Win 10 battles",
        category: AchievementCategory::Battle,
        requirement: AchievementRequirement::Wins,
        target: 10,
        reward: Reward::Pack(PackType::Premium),
    },
    AchievementDefinition {
        name: "Collector",
        description: "Collect 50 cards",
        category: AchievementCategory::Collection,
        requirement: AchievementRequirement::CardsCollected,
        target: 50,
        reward: Reward::Pack(PackType::Legendary),
    },
    AchievementDefinition {
        name: "Social Butterfly",
        description: "Make 5 friends",
        category: AchievementCategory::Social,
        requirement: AchievementRequirement::FriendsMade,
        target: 5,
        reward: Reward::Karma(100),
    },
    AchievementDefinition {
        name: "Trade Guru",
        description: "Complete 10 trades",
        category: AchievementCategory::Trading,
        requirement: AchievementRequirement::TradesCompleted,
        target: 10,
        reward: Reward::Pack(PackType::Premium),
    },
    AchievementDefinition {
        name: "Master Trader",
        description: "Complete 50 trades",
        category: AchievementCategory::Trading,
        requirement: AchievementRequirement::TradesCompleted,
        target: 50,
        reward: Reward::Pack(PackType::Legendary),
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub requirement: AchievementRequirement,
    pub target: i32,
    pub reward: Reward,
}

impl Achievement {
    pub fn from_entity(entity: entity::achievement::Model) -> Result<Self, AppError> {
        Ok(Self {
            reward: Reward::from_columns(
                &entity.reward_kind,
                entity.reward_pack_type.as_deref(),
                entity.reward_amount,
            )?,
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: AchievementCategory::from_stored(&entity.category)?,
            requirement: AchievementRequirement::from_stored(&entity.requirement_kind)?,
            target: entity.requirement_target,
        })
    }

    pub fn is_met(&self, progress: &AgentProgress) -> bool {
        progress.value(self.requirement) >= self.target as i64
    }

    pub fn into_dto(self) -> AchievementDto {
        AchievementDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category.as_str().to_string(),
            requirement: self.requirement.as_str().to_string(),
            target: self.target,
            reward: self.reward.into_dto(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EarnedAchievement {
    pub achievement: Achievement,
    pub completed_at: DateTime<Utc>,
}

impl EarnedAchievement {
    pub fn into_dto(self) -> EarnedAchievementDto {
        EarnedAchievementDto {
            achievement: self.achievement.into_dto(),
            completed_at: self.completed_at,
        }
    }
}

/// Current counters an agent is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentProgress {
    pub battles_completed: i64,
    pub wins: i64,
    pub cards_owned: i64,
    pub friends: i64,
    pub trades_completed: i64,
}

impl AgentProgress {
    pub fn value(&self, requirement: AchievementRequirement) -> i64 {
        match requirement {
            AchievementRequirement::BattlesCompleted => self.battles_completed,
            AchievementRequirement::Wins => self.wins,
            AchievementRequirement::CardsCollected => self.cards_owned,
            AchievementRequirement::FriendsMade => self.friends,
            AchievementRequirement::TradesCompleted => self.trades_completed,
        }
    }
}
