use super::*;

/// Tests unlocking the first-battle achievement.
///
/// Verifies the award is stored with its pack reward and a notification, and that a
/// second check does not award it again.
///
/// Expected: ["First Battle"] then [], one standard pack owned
#[tokio::test]
async fn unlocks_met_achievement_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db).wins(1).build().await?;

    let service = AchievementService::new(db);
    service.init().await?;

    let unlocked = service.check(&agent.id).await?;
    assert_eq!(unlocked, vec!["First Battle".to_string()]);
    assert!(service.check(&agent.id).await?.is_empty());

    let earned = service.earned(&agent.id).await?;
    assert_eq!(earned.len(), 1);
    assert_eq!(
        service.available(&agent.id).await?.len(),
        ACHIEVEMENTS.len() - 1
    );

    let packs = entity::prelude::Pack::find()
        .filter(entity::pack::Column::OwnerAgentId.eq(agent.id.as_str()))
        .filter(entity::pack::Column::PackType.eq("standard"))
        .count(db)
        .await?;
    assert_eq!(packs, 1);

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientAgentId.eq(agent.id.as_str()))
        .filter(entity::notification::Column::NotificationType.eq("achievement"))
        .count(db)
        .await?;
    assert_eq!(notifications, 1);

    Ok(())
}

/// Tests thresholds across several achievements.
///
/// Expected: 10 trades unlocks Trade Guru but not Master Trader
#[tokio::test]
async fn respects_targets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .trades_completed(10)
        .build()
        .await?;

    let service = AchievementService::new(db);
    service.init().await?;

    let unlocked = service.check(&agent.id).await?;

    assert_eq!(unlocked, vec!["Trade Guru".to_string()]);

    Ok(())
}

/// Tests progress counters.
///
/// Expected: battles sum wins and losses, cards and friends are live counts
#[tokio::test]
async fn progress_reflects_stats_and_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .wins(3)
        .losses(2)
        .build()
        .await?;
    let friend = factory::create_agent(db).await?;
    factory::create_friendship(db, &friend.id, &agent.id, "accepted").await?;
    factory::helpers::create_card_for_agent(db, &agent.id).await?;

    let progress = AchievementService::new(db).progress(&agent.id).await?;

    assert_eq!(progress.battles_completed, 5);
    assert_eq!(progress.wins, 3);
    assert_eq!(progress.cards_owned, 1);
    assert_eq!(progress.friends, 1);

    Ok(())
}

/// Tests the sweep over every agent.
///
/// Expected: 1 unlocked in total for two agents where only one qualifies
#[tokio::test]
async fn checks_all_agents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::agent::AgentFactory::new(db).losses(1).build().await?;
    factory::create_agent(db).await?;

    let service = AchievementService::new(db);
    service.init().await?;

    assert_eq!(service.check_all_agents().await?, 1);

    Ok(())
}
