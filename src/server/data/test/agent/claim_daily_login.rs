use super::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

/// Tests the first login of an agent that never logged in.
///
/// Expected: Ok(true) and the date is stored
#[tokio::test]
async fn claims_first_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let repo = AgentRepository::new(db);
    let claimed = repo.claim_daily_login(&agent.id, day(2)).await?;

    assert!(claimed);
    let stored = repo.find_by_id(&agent.id).await?.unwrap();
    assert_eq!(stored.last_login_date, Some(day(2)));

    Ok(())
}

/// Tests a second login on the same day.
///
/// Expected: Ok(false)
#[tokio::test]
async fn does_not_claim_twice_on_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .last_login_date(Some(day(2)))
        .build()
        .await?;

    let repo = AgentRepository::new(db);

    assert!(!repo.claim_daily_login(&agent.id, day(2)).await?);

    Ok(())
}

/// Tests a login on a later day than the stored one.
///
/// Expected: Ok(true) and the stored date moves forward
#[tokio::test]
async fn claims_login_on_new_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::agent::AgentFactory::new(db)
        .last_login_date(Some(day(1)))
        .build()
        .await?;

    let repo = AgentRepository::new(db);

    assert!(repo.claim_daily_login(&agent.id, day(2)).await?);
    assert_eq!(
        repo.find_by_id(&agent.id).await?.unwrap().last_login_date,
        Some(day(2))
    );

    Ok(())
}

/// Tests claiming for an agent that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn unknown_agent_claims_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AgentRepository::new(db);

    assert!(!repo.claim_daily_login("missing", day(2)).await?);

    Ok(())
}
