use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::quest::QuestRepository,
    error::AppError,
    model::{
        notification::{CreateNotificationParam, NotificationType},
        quest::{AgentQuest, AgentQuestStatus, Quest, QuestGoal, QuestType, QUESTS},
    },
    service::{notification::NotificationService, reward::grant_reward},
};

pub struct QuestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the predefined quests that are not stored yet.
    pub async fn init(&self) -> Result<u64, AppError> {
        QuestRepository::new(self.db).insert_missing(QUESTS).await
    }

    pub async fn all(&self) -> Result<Vec<Quest>, AppError> {
        QuestRepository::new(self.db).get_all().await
    }

    pub async fn active(&self, agent_id: &str) -> Result<Vec<AgentQuest>, AppError> {
        QuestRepository::new(self.db)
            .get_agent_quests(agent_id, AgentQuestStatus::InProgress)
            .await
    }

    pub async fn completed(&self, agent_id: &str) -> Result<Vec<AgentQuest>, AppError> {
        QuestRepository::new(self.db)
            .get_agent_quests(agent_id, AgentQuestStatus::Completed)
            .await
    }

    /// Quests the agent has neither started nor finished since the last reset.
    pub async fn available(&self, agent_id: &str) -> Result<Vec<Quest>, AppError> {
        let repo = QuestRepository::new(self.db);
        let started = repo.get_started_quest_ids(agent_id).await?;

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .filter(|quest| !started.contains(&quest.id))
            .collect())
    }

    /// Starts tracking a quest for the agent.
    ///
    /// # Returns
    /// - `Ok(AgentQuest)` - New progress row at zero
    /// - `Err(AppError::NotFound)` - Unknown quest
    /// - `Err(AppError::Conflict)` - Already started (or finished) since the last reset
    pub async fn start(&self, agent_id: &str, quest_id: &str) -> Result<AgentQuest, AppError> {
        let repo = QuestRepository::new(self.db);

        let quest = repo
            .find_by_id(quest_id)
            .await?
            .ok_or_else(|| AppError::not_found("Quest not found"))?;

        if repo
            .find_agent_quest_by_quest(agent_id, quest_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Quest already started"));
        }

        repo.start(agent_id, quest).await
    }

    /// Adds progress to the agent's in-progress row for `quest_id`.
    ///
    /// Reaching the target completes the quest and pays its reward.
    ///
    /// # Returns
    /// - `Ok(Some(AgentQuest))` - Updated row
    /// - `Ok(None)` - Quest not started or already completed
    pub async fn update_progress(
        &self,
        agent_id: &str,
        quest_id: &str,
        amount: i32,
    ) -> Result<Option<AgentQuest>, AppError> {
        let agent_quest = QuestRepository::new(self.db)
            .find_agent_quest_by_quest(agent_id, quest_id)
            .await?;

        match agent_quest {
            Some(agent_quest) if agent_quest.status == AgentQuestStatus::InProgress => {
                self.advance(agent_quest, amount).await
            }
            _ => Ok(None),
        }
    }

    /// Applies `update_progress` to every in-progress quest tracking `goal`.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Names of quests completed by this progress
    pub async fn record_progress(
        &self,
        agent_id: &str,
        goal: QuestGoal,
        amount: i32,
    ) -> Result<Vec<String>, AppError> {
        let agent_quests = QuestRepository::new(self.db)
            .get_in_progress_with_goal(agent_id, goal)
            .await?;

        let mut completed = Vec::new();
        for agent_quest in agent_quests {
            if let Some(updated) = self.advance(agent_quest, amount).await? {
                if updated.status == AgentQuestStatus::Completed {
                    completed.push(updated.quest.name);
                }
            }
        }

        Ok(completed)
    }

    /// `record_progress` for follow-ups that must not fail the triggering request.
    pub async fn record_progress_logged(&self, agent_id: &str, goal: QuestGoal, amount: i32) {
        if let Err(e) = self.record_progress(agent_id, goal, amount).await {
            tracing::error!(
                "Failed to record {} quest progress for agent {}: {}",
                goal,
                agent_id,
                e
            );
        }
    }

    /// Claims a quest whose target has been reached.
    ///
    /// # Returns
    /// - `Ok(AgentQuest)` - Completed quest; its reward has been granted
    /// - `Err(AppError::NotFound)` - No such agent quest for this agent
    /// - `Err(AppError::Conflict)` - Already completed
    /// - `Err(AppError::BadRequest)` - Progress below target
    pub async fn complete(
        &self,
        agent_id: &str,
        agent_quest_id: &str,
    ) -> Result<AgentQuest, AppError> {
        let agent_quest = QuestRepository::new(self.db)
            .find_agent_quest(agent_quest_id, agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Quest not found"))?;

        if agent_quest.status == AgentQuestStatus::Completed {
            return Err(AppError::conflict("Quest already completed"));
        }
        if !agent_quest.target_reached() {
            return Err(AppError::bad_request(format!(
                "Quest not complete: progress {}/{}",
                agent_quest.progress, agent_quest.quest.target
            )));
        }

        if !self.finish(&agent_quest).await? {
            return Err(AppError::conflict("Quest already completed"));
        }

        self.reload(&agent_quest).await
    }

    /// Deletes all agent progress for quests of `quest_type`.
    pub async fn reset(&self, quest_type: QuestType) -> Result<u64, AppError> {
        let reset = QuestRepository::new(self.db).reset_type(quest_type).await?;
        tracing::info!("Reset {} {} quest progress rows", reset, quest_type);

        Ok(reset)
    }

    async fn advance(
        &self,
        agent_quest: AgentQuest,
        amount: i32,
    ) -> Result<Option<AgentQuest>, AppError> {
        if !QuestRepository::new(self.db)
            .add_progress(&agent_quest.id, amount)
            .await?
        {
            return Ok(None);
        }

        let updated = self.reload(&agent_quest).await?;
        if updated.status == AgentQuestStatus::InProgress && updated.target_reached() {
            self.finish(&updated).await?;
            return Ok(Some(self.reload(&updated).await?));
        }

        Ok(Some(updated))
    }

    /// Marks the quest completed and pays its reward in one transaction, then notifies.
    ///
    /// Returns false when another call completed it first.
    async fn finish(&self, agent_quest: &AgentQuest) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        if !QuestRepository::new(&txn)
            .mark_completed(&agent_quest.id)
            .await?
        {
            return Ok(false);
        }
        grant_reward(&txn, &agent_quest.agent_id, agent_quest.quest.reward).await?;

        txn.commit().await?;

        let quest = &agent_quest.quest;
        tracing::info!("Agent {} completed quest {}", agent_quest.agent_id, quest.name);

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    agent_quest.agent_id.as_str(),
                    NotificationType::Quest,
                    "Quest completed",
                    format!(
                        "You completed {} and received {}!",
                        quest.name,
                        quest.reward.describe()
                    ),
                )
                .with_data(json!({
                    "agent_quest_id": agent_quest.id,
                    "quest_id": quest.id,
                })),
            )
            .await;

        Ok(true)
    }

    async fn reload(&self, agent_quest: &AgentQuest) -> Result<AgentQuest, AppError> {
        QuestRepository::new(self.db)
            .find_agent_quest(&agent_quest.id, &agent_quest.agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Quest not found"))
    }
}
