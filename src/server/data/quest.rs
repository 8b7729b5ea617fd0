//! Quest data repository.
//!
//! Covers the quest catalogue and each agent's progress rows (`agent_quests`).

use std::collections::HashSet;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::quest::{AgentQuest, AgentQuestStatus, Quest, QuestDefinition, QuestGoal, QuestType},
};

pub struct QuestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn join_quest(
    (agent_quest, quest): (entity::agent_quest::Model, Option<entity::quest::Model>),
) -> Result<AgentQuest, AppError> {
    let quest = quest.ok_or_else(|| {
        AppError::InternalError(format!("Agent quest {} has no quest", agent_quest.id))
    })?;

    AgentQuest::from_entity(agent_quest, Quest::from_entity(quest)?)
}

impl<'a, C: ConnectionTrait> QuestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts each definition whose name is not yet present and returns how many were added.
    pub async fn insert_missing(&self, definitions: &[QuestDefinition]) -> Result<u64, AppError> {
        let mut inserted = 0;
        for definition in definitions {
            inserted += entity::prelude::Quest::insert(entity::quest::ActiveModel {
                id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
                name: ActiveValue::Set(definition.name.to_string()),
                description: ActiveValue::Set(definition.description.to_string()),
                quest_type: ActiveValue::Set(definition.quest_type.as_str().to_string()),
                goal: ActiveValue::Set(definition.goal.as_str().to_string()),
                target: ActiveValue::Set(definition.target),
                reward_kind: ActiveValue::Set(definition.reward.kind().to_string()),
                reward_pack_type: ActiveValue::Set(
                    definition.reward.pack_type().map(|p| p.as_str().to_string()),
                ),
                reward_amount: ActiveValue::Set(definition.reward.amount()),
                created_at: ActiveValue::Set(Utc::now()),
            })
            .on_conflict(
                OnConflict::column(entity::quest::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(inserted)
    }

    /// Gets every quest, daily before weekly, then by name.
    pub async fn get_all(&self) -> Result<Vec<Quest>, AppError> {
        let entities = entity::prelude::Quest::find()
            .order_by_asc(entity::quest::Column::QuestType)
            .order_by_asc(entity::quest::Column::Name)
            .all(self.db)
            .await?;

        entities.into_iter().map(Quest::from_entity).collect()
    }

    pub async fn find_by_id(&self, quest_id: &str) -> Result<Option<Quest>, AppError> {
        let entity = entity::prelude::Quest::find_by_id(quest_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Quest::from_entity).transpose()
    }

    /// Gets the agent's quests with the given status, most recently started first.
    pub async fn get_agent_quests(
        &self,
        agent_id: &str,
        status: AgentQuestStatus,
    ) -> Result<Vec<AgentQuest>, AppError> {
        let results = entity::prelude::AgentQuest::find()
            .find_also_related(entity::prelude::Quest)
            .filter(entity::agent_quest::Column::AgentId.eq(agent_id))
            .filter(entity::agent_quest::Column::Status.eq(status.as_str()))
            .order_by_desc(entity::agent_quest::Column::StartedAt)
            .all(self.db)
            .await?;

        results.into_iter().map(join_quest).collect()
    }

    /// IDs of every quest the agent has a progress row for, whatever its status.
    pub async fn get_started_quest_ids(&self, agent_id: &str) -> Result<HashSet<String>, AppError> {
        let ids = entity::prelude::AgentQuest::find()
            .select_only()
            .column(entity::agent_quest::Column::QuestId)
            .filter(entity::agent_quest::Column::AgentId.eq(agent_id))
            .into_tuple::<String>()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    pub async fn find_agent_quest(
        &self,
        agent_quest_id: &str,
        agent_id: &str,
    ) -> Result<Option<AgentQuest>, AppError> {
        let result = entity::prelude::AgentQuest::find_by_id(agent_quest_id.to_string())
            .find_also_related(entity::prelude::Quest)
            .filter(entity::agent_quest::Column::AgentId.eq(agent_id))
            .one(self.db)
            .await?;

        result.map(join_quest).transpose()
    }

    /// Finds the agent's progress row for a quest.
    pub async fn find_agent_quest_by_quest(
        &self,
        agent_id: &str,
        quest_id: &str,
    ) -> Result<Option<AgentQuest>, AppError> {
        let result = entity::prelude::AgentQuest::find()
            .find_also_related(entity::prelude::Quest)
            .filter(entity::agent_quest::Column::AgentId.eq(agent_id))
            .filter(entity::agent_quest::Column::QuestId.eq(quest_id))
            .one(self.db)
            .await?;

        result.map(join_quest).transpose()
    }

    /// In-progress quests of the agent that track `goal`.
    pub async fn get_in_progress_with_goal(
        &self,
        agent_id: &str,
        goal: QuestGoal,
    ) -> Result<Vec<AgentQuest>, AppError> {
        let results = entity::prelude::AgentQuest::find()
            .find_also_related(entity::prelude::Quest)
            .filter(entity::agent_quest::Column::AgentId.eq(agent_id))
            .filter(
                entity::agent_quest::Column::Status.eq(AgentQuestStatus::InProgress.as_str()),
            )
            .filter(entity::quest::Column::Goal.eq(goal.as_str()))
            .all(self.db)
            .await?;

        results.into_iter().map(join_quest).collect()
    }

    /// Creates an in-progress row with zero progress.
    pub async fn start(&self, agent_id: &str, quest: Quest) -> Result<AgentQuest, AppError> {
        let entity = entity::agent_quest::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            agent_id: ActiveValue::Set(agent_id.to_string()),
            quest_id: ActiveValue::Set(quest.id.clone()),
            progress: ActiveValue::Set(0),
            status: ActiveValue::Set(AgentQuestStatus::InProgress.as_str().to_string()),
            started_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        AgentQuest::from_entity(entity, quest)
    }

    /// Adds `amount` to an in-progress row.
    ///
    /// # Returns
    /// - `Ok(true)` - Progress updated
    /// - `Ok(false)` - Row missing or no longer in progress
    pub async fn add_progress(&self, agent_quest_id: &str, amount: i32) -> Result<bool, AppError> {
        let result = entity::prelude::AgentQuest::update_many()
            .col_expr(
                entity::agent_quest::Column::Progress,
                Expr::col(entity::agent_quest::Column::Progress).add(amount),
            )
            .filter(entity::agent_quest::Column::Id.eq(agent_quest_id))
            .filter(
                entity::agent_quest::Column::Status.eq(AgentQuestStatus::InProgress.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks an in-progress row completed.
    ///
    /// # Returns
    /// - `Ok(true)` - This call completed the quest
    /// - `Ok(false)` - Already completed
    pub async fn mark_completed(&self, agent_quest_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::AgentQuest::update_many()
            .col_expr(
                entity::agent_quest::Column::Status,
                Expr::value(AgentQuestStatus::Completed.as_str()),
            )
            .col_expr(entity::agent_quest::Column::CompletedAt, Expr::value(Utc::now()))
            .filter(entity::agent_quest::Column::Id.eq(agent_quest_id))
            .filter(
                entity::agent_quest::Column::Status.eq(AgentQuestStatus::InProgress.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes all agent progress for quests of `quest_type` and returns the number of rows.
    pub async fn reset_type(&self, quest_type: QuestType) -> Result<u64, AppError> {
        let quest_ids = entity::prelude::Quest::find()
            .select_only()
            .column(entity::quest::Column::Id)
            .filter(entity::quest::Column::QuestType.eq(quest_type.as_str()))
            .into_tuple::<String>()
            .all(self.db)
            .await?;
        if quest_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::AgentQuest::delete_many()
            .filter(entity::agent_quest::Column::QuestId.is_in(quest_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
