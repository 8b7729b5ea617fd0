use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        agent_stats::AgentStatsRepository, leaderboard::LeaderboardRepository,
        pack::PackRepository,
    },
    error::AppError,
    model::{
        leaderboard::{
            LeaderboardEntry, LeaderboardSort, WeeklyReward, LEADERBOARD_SIZE, WEEKLY_REWARD_PACK,
        },
        notification::{CreateNotificationParam, NotificationType},
    },
    service::notification::NotificationService,
    util::time::iso_week_key,
};

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Top agents by `sort`, ranked from 1.
    pub async fn get_leaderboard(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let rows = LeaderboardRepository::new(self.db)
            .top(sort, LEADERBOARD_SIZE)
            .await?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| LeaderboardEntry {
                rank: i as u32 + 1,
                row,
            })
            .collect())
    }

    /// Rewards the ELO top ten for the current ISO week.
    pub async fn distribute_weekly_rewards(&self) -> Result<Vec<WeeklyReward>, AppError> {
        self.distribute_weekly_rewards_for(iso_week_key(Utc::now()))
            .await
    }

    /// Grants a legendary pack to each top-ten agent not yet rewarded for `week_key`.
    ///
    /// All packs and rank records commit together; notifications follow.
    ///
    /// # Returns
    /// - `Ok(Vec<WeeklyReward>)` - Agents rewarded by this call (empty when nobody qualifies)
    pub async fn distribute_weekly_rewards_for(
        &self,
        week_key: i32,
    ) -> Result<Vec<WeeklyReward>, AppError> {
        let txn = self.db.begin().await?;

        let rows = LeaderboardRepository::new(&txn)
            .top(LeaderboardSort::Elo, LEADERBOARD_SIZE)
            .await?;

        let stats_repo = AgentStatsRepository::new(&txn);
        let pack_repo = PackRepository::new(&txn);
        let mut rewards = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            let rank = i as u32 + 1;

            let already_rewarded = stats_repo
                .find_by_agent_id(&row.agent_id)
                .await?
                .is_some_and(|stats| stats.last_weekly_reward == Some(week_key));
            if already_rewarded {
                continue;
            }

            pack_repo.create(&row.agent_id, WEEKLY_REWARD_PACK).await?;
            stats_repo
                .record_weekly_reward(&row.agent_id, rank, week_key)
                .await?;

            rewards.push(WeeklyReward {
                agent_id: row.agent_id,
                name: row.name,
                rank,
            });
        }

        txn.commit().await?;

        tracing::info!(
            "Distributed {} weekly leaderboard rewards for week {}",
            rewards.len(),
            week_key
        );

        let notifications = NotificationService::new(self.db);
        for reward in &rewards {
            notifications
                .notify(
                    CreateNotificationParam::new(
                        reward.agent_id.as_str(),
                        NotificationType::System,
                        "Weekly leaderboard reward",
                        format!(
                            "You finished #{} on the leaderboard and received a {} pack!",
                            reward.rank, WEEKLY_REWARD_PACK
                        ),
                    )
                    .with_data(json!({ "rank": reward.rank, "week": week_key })),
                )
                .await;
        }

        Ok(rewards)
    }
}
