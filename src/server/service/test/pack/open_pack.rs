use super::*;

/// Tests opening an unopened standard pack.
///
/// Verifies the pack is flagged, five cards are minted to the agent and the counters
/// move by one pack and five cards.
///
/// Expected: Ok with 5 owned cards, packs_opened 1, cards_collected 5
#[tokio::test]
async fn opens_pack_and_mints_cards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    factory::create_card_template(db).await?;
    let pack = factory::create_pack(db, &agent.id, "standard").await?;

    let opened = PackService::new(db).open_pack(&agent.id, &pack.id).await?;

    assert_eq!(opened.cards.len(), CARDS_PER_PACK);
    assert!(opened.pack.opened);
    for card in &opened.cards {
        assert_eq!(card.owner_agent_id.as_deref(), Some(agent.id.as_str()));
        assert!(card.mint_number >= 1);
    }

    let stats = entity::prelude::AgentStats::find_by_id(agent.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stats.packs_opened, 1);
    assert_eq!(stats.cards_collected, CARDS_PER_PACK as i32);

    let remaining = PackService::new(db).get_packs(&agent.id).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests that mint numbers continue across packs of the same template.
///
/// Expected: mint numbers 1 through 10 across two packs with one template
#[tokio::test]
async fn numbers_mints_sequentially() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    factory::create_card_template(db).await?;
    let first = factory::create_pack(db, &agent.id, "starter").await?;
    let second = factory::create_pack(db, &agent.id, "starter").await?;

    let service = PackService::new(db);
    let mut mints: Vec<i32> = service
        .open_pack(&agent.id, &first.id)
        .await?
        .cards
        .iter()
        .map(|c| c.mint_number)
        .collect();
    mints.extend(
        service
            .open_pack(&agent.id, &second.id)
            .await?
            .cards
            .iter()
            .map(|c| c.mint_number),
    );
    mints.sort();

    assert_eq!(mints, (1..=10).collect::<Vec<i32>>());

    Ok(())
}

/// Tests opening the same pack twice.
///
/// Expected: Err(Conflict) and no extra cards
#[tokio::test]
async fn rejects_already_opened_pack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    factory::create_card_template(db).await?;
    let pack = factory::create_pack(db, &agent.id, "standard").await?;

    let service = PackService::new(db);
    service.open_pack(&agent.id, &pack.id).await?;
    let result = service.open_pack(&agent.id, &pack.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(
        entity::prelude::Card::find().count(db).await?,
        CARDS_PER_PACK as u64
    );

    Ok(())
}

/// Tests opening another agent's pack.
///
/// Expected: Err(NotFound) and the pack stays unopened
#[tokio::test]
async fn hides_other_agents_pack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = create_agent(db).await?;
    let intruder = create_agent(db).await?;
    factory::create_card_template(db).await?;
    let pack = factory::create_pack(db, &owner.id, "standard").await?;

    let result = PackService::new(db).open_pack(&intruder.id, &pack.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(PackService::new(db).get_packs(&owner.id).await?.len(), 1);

    Ok(())
}

/// Tests opening a pack before any template exists.
///
/// Expected: Err(NoCardTemplates) and the pack stays unopened
#[tokio::test]
async fn fails_without_templates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let pack = factory::create_pack(db, &agent.id, "standard").await?;

    let result = PackService::new(db).open_pack(&agent.id, &pack.id).await;

    match result {
        Err(AppError::NoCardTemplates) => {}
        other => panic!("expected NoCardTemplates, got {:?}", other.map(|o| o.pack.id)),
    }
    assert_eq!(PackService::new(db).get_packs(&agent.id).await?.len(), 1);

    Ok(())
}

/// Tests that opening a pack advances a started packs-opened quest.
///
/// Expected: quest completed and its standard pack reward granted
#[tokio::test]
async fn records_pack_quest_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    factory::create_card_template(db).await?;
    let quest = factory::create_quest(db).await?;
    let pack = factory::create_pack(db, &agent.id, "premium").await?;

    let quests = QuestService::new(db);
    let started = quests.start(&agent.id, &quest.id).await?;
    PackService::new(db).open_pack(&agent.id, &pack.id).await?;

    let completed = quests.completed(&agent.id).await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, started.id);
    assert_eq!(completed[0].status, AgentQuestStatus::Completed);

    let reward_packs = entity::prelude::Pack::find()
        .filter(entity::pack::Column::OwnerAgentId.eq(agent.id.as_str()))
        .filter(entity::pack::Column::PackType.eq("standard"))
        .count(db)
        .await?;
    assert_eq!(reward_packs, 1);

    Ok(())
}

/// Tests creating a pack for an agent and opening it.
///
/// Expected: unopened pack listed for the agent, then opened with five cards
#[tokio::test]
async fn opens_created_pack() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    factory::create_card_template(db).await?;

    let service = PackService::new(db);
    let pack = service
        .create_pack(&agent.id, crate::server::model::pack::PackType::Legendary)
        .await?;

    assert!(!pack.opened);
    assert_eq!(pack.owner_agent_id, agent.id);
    let packs = service.get_packs(&agent.id).await?;
    assert_eq!(packs.len(), 1);
    assert_eq!(packs[0].id, pack.id);

    let opened = service.open_pack(&agent.id, &pack.id).await?;
    assert_eq!(opened.cards.len(), CARDS_PER_PACK);

    Ok(())
}
