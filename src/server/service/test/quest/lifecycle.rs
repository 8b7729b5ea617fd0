use super::*;

/// Tests seeding the predefined quests.
///
/// Expected: every quest inserted once, a second run inserts nothing
#[tokio::test]
async fn init_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = QuestService::new(db);
    assert_eq!(service.init().await?, QUESTS.len() as u64);
    assert_eq!(service.init().await?, 0);
    assert_eq!(service.all().await?.len(), QUESTS.len());

    Ok(())
}

/// Tests starting a quest.
///
/// Verifies the quest moves from available to active and cannot be started twice.
///
/// Expected: progress 0 in_progress row, then Err(Conflict)
#[tokio::test]
async fn starts_quest_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let quest = factory::create_quest(db).await?;

    let service = QuestService::new(db);
    assert_eq!(service.available(&agent.id).await?.len(), 1);

    let started = service.start(&agent.id, &quest.id).await?;
    assert_eq!(started.progress, 0);
    assert_eq!(started.status, AgentQuestStatus::InProgress);
    assert!(service.available(&agent.id).await?.is_empty());
    assert_eq!(service.active(&agent.id).await?.len(), 1);

    let again = service.start(&agent.id, &quest.id).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let unknown = service.start(&agent.id, "missing").await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests claiming a quest before its target is reached.
///
/// Expected: Err(BadRequest) and the quest stays in progress
#[tokio::test]
async fn complete_requires_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let quest = factory::quest::QuestFactory::new(db)
        .goal("battles_won", 3)
        .build()
        .await?;

    let service = QuestService::new(db);
    let started = service.start(&agent.id, &quest.id).await?;
    let result = service.complete(&agent.id, &started.id).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Quest not complete: progress 0/3"),
        other => panic!("expected BadRequest, got {:?}", other.map(|q| q.id)),
    }
    assert_eq!(service.active(&agent.id).await?.len(), 1);

    Ok(())
}

/// Tests resetting daily quests.
///
/// Expected: the daily row is removed, the weekly row survives and the daily quest is
/// available again
#[tokio::test]
async fn reset_clears_only_matching_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let daily = factory::create_quest(db).await?;
    let weekly = factory::quest::QuestFactory::new(db)
        .quest_type("weekly")
        .build()
        .await?;

    let service = QuestService::new(db);
    service.start(&agent.id, &daily.id).await?;
    service.start(&agent.id, &weekly.id).await?;

    let reset = service.reset(QuestType::Daily).await?;

    assert_eq!(reset, 1);
    let active = service.active(&agent.id).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].quest.id, weekly.id);
    let available = service.available(&agent.id).await?;
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, daily.id);

    Ok(())
}
