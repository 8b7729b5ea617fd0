use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    model::quest::QuestType,
    service::{
        achievement::AchievementService, leaderboard::LeaderboardService, quest::QuestService,
    },
};

/// Midnight UTC every day.
const DAILY_QUEST_RESET: &str = "0 0 0 * * *";
/// Midnight UTC at the start of Sunday.
const WEEKLY_QUEST_RESET: &str = "0 0 0 * * Sun";
/// Midnight UTC at the start of Monday.
const WEEKLY_LEADERBOARD_REWARDS: &str = "0 0 0 * * Mon";
/// Top of every hour.
const ACHIEVEMENT_SWEEP: &str = "0 0 * * * *";

/// Starts the game maintenance scheduler.
///
/// Registers four jobs (all times UTC):
/// - Daily quest reset at midnight
/// - Weekly quest reset at midnight on Sunday
/// - Weekly leaderboard rewards at midnight on Monday
/// - Achievement check for every agent at the top of each hour
///
/// Job failures are logged and never stop the scheduler.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(quest_reset_job(DAILY_QUEST_RESET, QuestType::Daily, db.clone())?)
        .await?;
    scheduler
        .add(quest_reset_job(WEEKLY_QUEST_RESET, QuestType::Weekly, db.clone())?)
        .await?;

    let rewards_db = db.clone();
    let rewards_job = Job::new_async(WEEKLY_LEADERBOARD_REWARDS, move |_uuid, _lock| {
        let db = rewards_db.clone();

        Box::pin(async move {
            match LeaderboardService::new(&db).distribute_weekly_rewards().await {
                Ok(rewards) => {
                    tracing::info!("Weekly leaderboard rewards given to {} agents", rewards.len())
                }
                Err(e) => tracing::error!("Error distributing weekly leaderboard rewards: {}", e),
            }
        })
    })?;
    scheduler.add(rewards_job).await?;

    let sweep_db = db;
    let sweep_job = Job::new_async(ACHIEVEMENT_SWEEP, move |_uuid, _lock| {
        let db = sweep_db.clone();

        Box::pin(async move {
            match AchievementService::new(&db).check_all_agents().await {
                Ok(unlocked) if unlocked > 0 => {
                    tracing::info!("Achievement sweep unlocked {} achievements", unlocked)
                }
                Ok(_) => tracing::debug!("Achievement sweep found nothing new"),
                Err(e) => tracing::error!("Error running achievement sweep: {}", e),
            }
        })
    })?;
    scheduler.add(sweep_job).await?;

    scheduler.start().await?;

    tracing::info!("Game scheduler started");

    Ok(())
}

fn quest_reset_job(
    schedule: &str,
    quest_type: QuestType,
    db: DatabaseConnection,
) -> Result<Job, AppError> {
    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = QuestService::new(&db).reset(quest_type).await {
                tracing::error!("Error resetting {} quests: {}", quest_type, e);
            }
        })
    })?;

    Ok(job)
}
