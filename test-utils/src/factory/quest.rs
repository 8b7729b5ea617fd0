//! Quest definition factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct QuestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    quest_type: String,
    goal: String,
    target: i32,
    reward_kind: String,
    reward_pack_type: Option<String>,
    reward_amount: Option<i32>,
}

impl<'a> QuestFactory<'a> {
    /// Defaults: daily `packs_opened` quest with target `1` rewarding a standard pack.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Quest {}", next_id()),
            quest_type: "daily".to_string(),
            goal: "packs_opened".to_string(),
            target: 1,
            reward_kind: "pack".to_string(),
            reward_pack_type: Some("standard".to_string()),
            reward_amount: None,
        }
    }

    pub fn quest_type(mut self, quest_type: impl Into<String>) -> Self {
        self.quest_type = quest_type.into();
        self
    }

    pub fn goal(mut self, goal: impl Into<String>, target: i32) -> Self {
        self.goal = goal.into();
        self.target = target;
        self
    }

    pub fn karma_reward(mut self, amount: i32) -> Self {
        self.reward_kind = "karma".to_string();
        self.reward_pack_type = None;
        self.reward_amount = Some(amount);
        self
    }

    pub async fn build(self) -> Result<entity::quest::Model, DbErr> {
        entity::quest::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            description: ActiveValue::Set(format!("{} description", self.name)),
            name: ActiveValue::Set(self.name),
            quest_type: ActiveValue::Set(self.quest_type),
            goal: ActiveValue::Set(self.goal),
            target: ActiveValue::Set(self.target),
            reward_kind: ActiveValue::Set(self.reward_kind),
            reward_pack_type: ActiveValue::Set(self.reward_pack_type),
            reward_amount: ActiveValue::Set(self.reward_amount),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a daily quest with default values.
pub async fn create_quest(db: &DatabaseConnection) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db).build().await
}
