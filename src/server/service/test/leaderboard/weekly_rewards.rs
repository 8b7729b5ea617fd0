use super::*;

/// Tests distributing the weekly rewards.
///
/// Verifies each top agent gets a legendary pack and its rank is recorded.
///
/// Expected: two rewards ranked 1 and 2, rank and week stored on the stats rows
#[tokio::test]
async fn rewards_top_agents() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let second = factory::agent::create_agent_with_elo(db, 1100).await?;
    let first = factory::agent::create_agent_with_elo(db, 1300).await?;

    let rewards = LeaderboardService::new(db)
        .distribute_weekly_rewards_for(202610)
        .await?;

    assert_eq!(rewards.len(), 2);
    assert_eq!(rewards[0].agent_id, first.id);
    assert_eq!(rewards[0].rank, 1);
    assert_eq!(rewards[1].agent_id, second.id);
    assert_eq!(rewards[1].rank, 2);

    let stats = entity::prelude::AgentStats::find_by_id(second.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stats.weekly_leaderboard_rank, Some(2));
    assert_eq!(stats.last_weekly_reward, Some(202610));

    let legendary = entity::prelude::Pack::find()
        .filter(entity::pack::Column::PackType.eq(WEEKLY_REWARD_PACK.as_str()))
        .count(db)
        .await?;
    assert_eq!(legendary, 2);

    let notified = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientAgentId.eq(first.id.as_str()))
        .count(db)
        .await?;
    assert_eq!(notified, 1);

    Ok(())
}

/// Tests running the distribution twice in the same week.
///
/// Expected: second run rewards nobody and creates no packs
#[tokio::test]
async fn skips_agents_already_rewarded_this_week() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_agent(db).await?;
    factory::create_agent(db).await?;

    let service = LeaderboardService::new(db);
    service.distribute_weekly_rewards_for(202610).await?;
    let again = service.distribute_weekly_rewards_for(202610).await?;

    assert!(again.is_empty());
    assert_eq!(entity::prelude::Pack::find().count(db).await?, 2);

    let next_week = service.distribute_weekly_rewards_for(202611).await?;
    assert_eq!(next_week.len(), 2);

    Ok(())
}

/// Tests the distribution with no agents.
///
/// Expected: Ok with no rewards
#[tokio::test]
async fn empty_leaderboard_rewards_nobody() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rewards = LeaderboardService::new(db)
        .distribute_weekly_rewards_for(202610)
        .await?;

    assert!(rewards.is_empty());

    Ok(())
}
