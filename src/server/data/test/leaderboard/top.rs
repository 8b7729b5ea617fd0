use super::*;

/// Tests ordering by ELO.
///
/// Expected: agents in descending ELO order
#[tokio::test]
async fn orders_by_elo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let low = factory::agent::create_agent_with_elo(db, 900).await?;
    let high = factory::agent::create_agent_with_elo(db, 1300).await?;
    let mid = factory::agent::create_agent_with_elo(db, 1100).await?;

    let rows = LeaderboardRepository::new(db)
        .top(LeaderboardSort::Elo, 10)
        .await?;

    let ids: Vec<&str> = rows.iter().map(|r| r.agent_id.as_str()).collect();
    assert_eq!(ids, vec![high.id.as_str(), mid.id.as_str(), low.id.as_str()]);
    assert_eq!(rows[0].elo, 1300);

    Ok(())
}

/// Tests ordering by owned card count.
///
/// Expected: the agent with more cards first, with its count reported
#[tokio::test]
async fn orders_by_card_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let rich = factory::agent::create_agent_with_elo(db, 800).await?;
    let poor = factory::agent::create_agent_with_elo(db, 1200).await?;
    let template = factory::create_card_template(db).await?;
    for _ in 0..3 {
        factory::create_card(db, template.id, &rich.id).await?;
    }
    factory::create_card(db, template.id, &poor.id).await?;

    let rows = LeaderboardRepository::new(db)
        .top(LeaderboardSort::Cards, 10)
        .await?;

    assert_eq!(rows[0].agent_id, rich.id);
    assert_eq!(rows[0].card_count, 3);
    assert_eq!(rows[1].card_count, 1);

    Ok(())
}

/// Tests that the limit caps the number of rows.
///
/// Expected: 2 rows out of 3 agents
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    for _ in 0..3 {
        factory::create_agent(db).await?;
    }

    let rows = LeaderboardRepository::new(db)
        .top(LeaderboardSort::Wins, 2)
        .await?;

    assert_eq!(rows.len(), 2);

    Ok(())
}
