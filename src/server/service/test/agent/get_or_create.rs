use super::*;

/// Tests registering an agent seen for the first time.
///
/// Verifies the stats row is created with defaults and the signup bonus is granted.
///
/// Expected: agent with elo 1000 and two unopened starter packs
#[tokio::test]
async fn registers_new_agent_with_starter_packs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let agent = AgentService::new(db)
        .get_or_create("mb_fresh", "Fresh Agent")
        .await?;

    assert_eq!(agent.moltbook_id, "mb_fresh");
    assert_eq!(agent.name, "Fresh Agent");
    assert_ne!(agent.id, agent.moltbook_id);

    let stats = entity::prelude::AgentStats::find_by_id(agent.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stats.elo, 1000);
    assert_eq!(stats.wins, 0);

    let packs = entity::prelude::Pack::find()
        .filter(entity::pack::Column::OwnerAgentId.eq(agent.id.as_str()))
        .filter(entity::pack::Column::PackType.eq("starter"))
        .count(db)
        .await?;
    assert_eq!(packs, SIGNUP_STARTER_PACKS as u64);

    Ok(())
}

/// Tests resolving an agent that already exists.
///
/// Verifies the signup bonus is granted only once and the stored name is kept.
///
/// Expected: same agent ID, still two packs
#[tokio::test]
async fn returns_existing_agent_without_bonus() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AgentService::new(db);
    let first = service.get_or_create("mb_repeat", "Repeat").await?;
    let second = service.get_or_create("mb_repeat", "Renamed").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Repeat");
    assert_eq!(entity::prelude::Pack::find().count(db).await?, 2);
    assert_eq!(entity::prelude::Agent::find().count(db).await?, 1);

    Ok(())
}

/// Tests resolving an existing agent whose stats row is missing.
///
/// Expected: stats row recreated, no signup packs granted
#[tokio::test]
async fn recreates_missing_stats_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_agent(db).await?;
    entity::prelude::AgentStats::delete_by_id(existing.id.clone())
        .exec(db)
        .await?;

    let agent = AgentService::new(db)
        .get_or_create(&existing.moltbook_id, &existing.name)
        .await?;

    assert_eq!(agent.id, existing.id);
    assert!(entity::prelude::AgentStats::find_by_id(existing.id.clone())
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::Pack::find().count(db).await?, 0);

    Ok(())
}

/// Tests registering an agent without reading it back.
///
/// Expected: one agent row after two calls
#[tokio::test]
async fn ensures_agent_exists_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AgentService::new(db);
    service.ensure_exists("mb_ensure", "Ensure").await?;
    service.ensure_exists("mb_ensure", "Ensure").await?;

    assert_eq!(entity::prelude::Agent::find().count(db).await?, 1);

    Ok(())
}
