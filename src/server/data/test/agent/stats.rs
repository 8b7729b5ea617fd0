use super::*;

/// Tests that `ensure` recreates a missing stats row with defaults and leaves an
/// existing one alone.
///
/// Expected: first call Ok(true), second Ok(false), ELO 1000
#[tokio::test]
async fn ensure_creates_missing_row_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    entity::prelude::AgentStats::delete_by_id(agent.id.clone())
        .exec(db)
        .await?;

    let repo = AgentStatsRepository::new(db);

    assert!(repo.ensure(&agent.id).await?);
    assert!(!repo.ensure(&agent.id).await?);
    let stats = repo.find_by_agent_id(&agent.id).await?.unwrap();
    assert_eq!(stats.elo, 1000);
    assert_eq!(stats.battles_completed(), 0);

    Ok(())
}

/// Tests applying a relative delta to stats.
///
/// Verifies positive and negative changes are added to the stored values and
/// untouched fields keep their values.
///
/// Expected: elo 980, losses 3, wins unchanged
#[tokio::test]
async fn apply_adds_delta() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .wins(4)
        .losses(2)
        .build()
        .await?;

    let repo = AgentStatsRepository::new(db);
    repo.apply(
        &agent.id,
        StatsDelta {
            elo: -20,
            losses: 1,
            ..Default::default()
        },
    )
    .await?;

    let stats = repo.find_by_agent_id(&agent.id).await?.unwrap();
    assert_eq!(stats.elo, 980);
    assert_eq!(stats.losses, 3);
    assert_eq!(stats.wins, 4);

    Ok(())
}

/// Tests recording a weekly reward.
///
/// Expected: rank and week key stored
#[tokio::test]
async fn records_weekly_reward() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let repo = AgentStatsRepository::new(db);
    repo.record_weekly_reward(&agent.id, 3, 202611).await?;

    let stats = repo.find_by_agent_id(&agent.id).await?.unwrap();
    assert_eq!(stats.weekly_leaderboard_rank, Some(3));
    assert_eq!(stats.last_weekly_reward, Some(202611));

    Ok(())
}
