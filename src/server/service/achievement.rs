use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        achievement::AchievementRepository, agent::AgentRepository,
        agent_stats::AgentStatsRepository, card::CardRepository, friend::FriendRepository,
    },
    error::AppError,
    model::{
        achievement::{Achievement, AgentProgress, EarnedAchievement, ACHIEVEMENTS},
        notification::{CreateNotificationParam, NotificationType},
    },
    service::{notification::NotificationService, reward::grant_reward},
};

pub struct AchievementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the predefined achievements that are not stored yet.
    pub async fn init(&self) -> Result<u64, AppError> {
        AchievementRepository::new(self.db)
            .insert_missing(ACHIEVEMENTS)
            .await
    }

    pub async fn all(&self) -> Result<Vec<Achievement>, AppError> {
        AchievementRepository::new(self.db).get_all().await
    }

    pub async fn earned(&self, agent_id: &str) -> Result<Vec<EarnedAchievement>, AppError> {
        AchievementRepository::new(self.db).get_earned(agent_id).await
    }

    pub async fn available(&self, agent_id: &str) -> Result<Vec<Achievement>, AppError> {
        let repo = AchievementRepository::new(self.db);
        let earned = repo.get_earned_ids(agent_id).await?;

        Ok(repo
            .get_all()
            .await?
            .into_iter()
            .filter(|achievement| !earned.contains(&achievement.id))
            .collect())
    }

    /// Collects the counters achievements are measured against.
    ///
    /// Battles count wins, losses and draws; cards count what the agent owns right now.
    pub async fn progress(&self, agent_id: &str) -> Result<AgentProgress, AppError> {
        let stats = AgentStatsRepository::new(self.db)
            .find_by_agent_id(agent_id)
            .await?;
        let cards_owned = CardRepository::new(self.db).count_by_owner(agent_id).await?;
        let friends = FriendRepository::new(self.db)
            .count_accepted_for_agent(agent_id)
            .await?;

        let (battles_completed, wins, trades_completed) = stats
            .map(|s| (s.battles_completed(), s.wins, s.trades_completed))
            .unwrap_or_default();

        Ok(AgentProgress {
            battles_completed: battles_completed as i64,
            wins: wins as i64,
            cards_owned: cards_owned as i64,
            friends: friends as i64,
            trades_completed: trades_completed as i64,
        })
    }

    /// Awards every unearned achievement whose requirement the agent now meets.
    ///
    /// Each award and its reward commit together; the notification follows.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Names of the achievements unlocked by this call
    pub async fn check(&self, agent_id: &str) -> Result<Vec<String>, AppError> {
        let repo = AchievementRepository::new(self.db);
        let progress = self.progress(agent_id).await?;
        let earned = repo.get_earned_ids(agent_id).await?;

        let mut unlocked = Vec::new();
        for achievement in repo.get_all().await? {
            if earned.contains(&achievement.id) || !achievement.is_met(&progress) {
                continue;
            }

            let txn = self.db.begin().await?;
            if !AchievementRepository::new(&txn)
                .award(agent_id, &achievement.id)
                .await?
            {
                continue;
            }
            grant_reward(&txn, agent_id, achievement.reward).await?;
            txn.commit().await?;

            tracing::info!("Agent {} unlocked achievement {}", agent_id, achievement.name);

            NotificationService::new(self.db)
                .notify(
                    CreateNotificationParam::new(
                        agent_id,
                        NotificationType::Achievement,
                        "Achievement unlocked",
                        format!(
                            "You unlocked {} and received {}!",
                            achievement.name,
                            achievement.reward.describe()
                        ),
                    )
                    .with_data(json!({ "achievement_id": achievement.id })),
                )
                .await;

            unlocked.push(achievement.name);
        }

        Ok(unlocked)
    }

    /// `check` for follow-ups that must not fail the triggering request.
    pub async fn check_logged(&self, agent_id: &str) {
        if let Err(e) = self.check(agent_id).await {
            tracing::error!("Failed to check achievements for agent {}: {}", agent_id, e);
        }
    }

    /// Runs `check` for every agent; per-agent failures are logged and skipped.
    ///
    /// # Returns
    /// - `Ok(usize)` - Total achievements unlocked across all agents
    pub async fn check_all_agents(&self) -> Result<usize, AppError> {
        let agent_ids = AgentRepository::new(self.db).get_all_ids().await?;

        let mut unlocked = 0;
        for agent_id in agent_ids {
            match self.check(&agent_id).await {
                Ok(names) => unlocked += names.len(),
                Err(e) => {
                    tracing::error!("Failed to check achievements for agent {}: {}", agent_id, e)
                }
            }
        }

        Ok(unlocked)
    }
}
