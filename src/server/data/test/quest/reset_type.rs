use super::*;

/// Tests resetting daily quests.
///
/// Verifies daily progress rows are deleted while weekly ones are kept.
///
/// Expected: 1 row deleted, weekly quest still in progress
#[tokio::test]
async fn resets_only_given_type() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let repo = QuestRepository::new(db);
    repo.insert_missing(QUESTS).await?;
    let quests = repo.get_all().await?;
    let daily = quests.iter().find(|q| q.quest_type == QuestType::Daily).unwrap();
    let weekly = quests.iter().find(|q| q.quest_type == QuestType::Weekly).unwrap();
    repo.start(&agent.id, daily.clone()).await?;
    repo.start(&agent.id, weekly.clone()).await?;

    let reset = repo.reset_type(QuestType::Daily).await?;

    assert_eq!(reset, 1);
    let remaining = repo
        .get_agent_quests(&agent.id, AgentQuestStatus::InProgress)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].quest.id, weekly.id);

    Ok(())
}
