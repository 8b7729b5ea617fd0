//! Achievement data repository.

use std::collections::HashSet;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::achievement::{Achievement, AchievementDefinition, EarnedAchievement},
};

pub struct AchievementRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AchievementRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts each definition whose name is not yet present.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of definitions inserted
    pub async fn insert_missing(
        &self,
        definitions: &[AchievementDefinition],
    ) -> Result<u64, AppError> {
        let mut inserted = 0;
        for definition in definitions {
            inserted += entity::prelude::Achievement::insert(entity::achievement::ActiveModel {
                id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                name: ActiveValue::Set(definition.name.to_string()),
                description: ActiveValue::Set(definition.description.to_string()),
                category: ActiveValue::Set(definition.category.as_str().to_string()),
                requirement_kind: ActiveValue::Set(definition.requirement.as_str().to_string()),
                requirement_target: ActiveValue::Set(definition.target),
                reward_kind: ActiveValue::Set(definition.reward.kind().to_string()),
                reward_pack_type: ActiveValue::Set(
                    definition.reward.pack_type().map(|p| p.as_str().to_string()),
                ),
                reward_amount: ActiveValue::Set(definition.reward.amount()),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .on_conflict(
                OnConflict::column(entity::achievement::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(inserted)
    }

    /// Gets every achievement ordered by category, then name.
    pub async fn get_all(&self) -> Result<Vec<Achievement>, AppError> {
        let entities = entity::prelude::Achievement::find()
            .order_by_asc(entity::achievement::Column::Category)
            .order_by_asc(entity::achievement::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Achievement::from_entity).collect()
    }

    /// Gets the achievements the agent has earned, most recent first.
    pub async fn get_earned(&self, agent_id: &str) -> Result<Vec<EarnedAchievement>, AppError> {
        let results = entity::prelude::AgentAchievement::find()
            .find_also_related(entity::prelude::Achievement)
            .filter(entity::agent_achievement::Column::AgentId.eq(agent_id))
            .order_by_desc(entity::agent_achievement::Column::CompletedAt)
            .all(self.db)
            .await?;

        let mut earned = Vec::with_capacity(results.len());
        for (agent_achievement, achievement) in results {
            if let Some(achievement) = achievement {
                earned.push(EarnedAchievement {
                    achievement: Achievement::from_entity(achievement)?,
                    completed_at: agent_achievement.completed_at,
                });
            }
        }

        Ok(earned)
    }

    pub async fn get_earned_ids(&self, agent_id: &str) -> Result<HashSet<String>, AppError> {
        let ids = entity::prelude::AgentAchievement::find()
            .select_only()
            .column(entity::agent_achievement::Column::AchievementId)
            .filter(entity::agent_achievement::Column::AgentId.eq(agent_id))
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Records that the agent earned an achievement.
    ///
    /// # Returns
    /// - `Ok(true)` - Newly awarded
    /// - `Ok(false)` - The agent already had it
    pub async fn award(&self, agent_id: &str, achievement_id: &str) -> Result<bool, AppError> {
        let existing = entity::prelude::AgentAchievement::find()
            .filter(entity::agent_achievement::Column::AgentId.eq(agent_id))
            .filter(entity::agent_achievement::Column::AchievementId.eq(achievement_id))
            .count(self.db)
            .await?;
        if existing > 0 {
            return Ok(false);
        }

        entity::agent_achievement::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            agent_id: ActiveValue::Set(agent_id.to_string()),
            achievement_id: ActiveValue::Set(achievement_id.to_string()),
            completed_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }
}
