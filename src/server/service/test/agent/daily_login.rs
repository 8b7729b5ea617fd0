use super::*;

/// Tests the first request of a UTC day.
///
/// Expected: standard pack granted, second check the same day grants nothing
#[tokio::test]
async fn grants_one_standard_pack_per_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    let today = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();

    let service = AgentService::new(db);
    let first = service.check_daily_login_on(&agent.id, today).await?;
    let second = service.check_daily_login_on(&agent.id, today).await?;

    assert!(first.pack_given);
    assert!(first.is_new_day);
    assert!(!second.pack_given);
    assert!(first.into_dto().is_some());
    assert!(second.into_dto().is_none());

    let packs = entity::prelude::Pack::find()
        .filter(entity::pack::Column::OwnerAgentId.eq(agent.id.as_str()))
        .filter(entity::pack::Column::PackType.eq("standard"))
        .count(db)
        .await?;
    assert_eq!(packs, 1);

    Ok(())
}

/// Tests an agent that last logged in on a previous day.
///
/// Expected: pack granted again on the new day
#[tokio::test]
async fn grants_again_on_next_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .last_login_date(NaiveDate::from_ymd_opt(2026, 2, 2))
        .build()
        .await?;

    let login = AgentService::new(db)
        .check_daily_login_on(&agent.id, NaiveDate::from_ymd_opt(2026, 2, 3).unwrap())
        .await?;

    assert!(login.pack_given);

    Ok(())
}

/// Tests the daily check for an agent ID that does not exist.
///
/// Expected: nothing granted
#[tokio::test]
async fn ignores_unknown_agent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let login = AgentService::new(db)
        .check_daily_login_on("missing", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap())
        .await?;

    assert!(!login.pack_given);
    assert!(!login.is_new_day);
    assert_eq!(entity::prelude::Pack::find().count(db).await?, 0);

    Ok(())
}
