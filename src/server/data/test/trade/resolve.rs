use super::*;

/// Tests that only the recipient can resolve a pending trade, and only once.
///
/// Expected: false for the sender, true for the recipient, false afterwards
#[tokio::test]
async fn recipient_resolves_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((agent_a, card_a), (agent_b, _)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let trade = factory::create_trade(db, &agent_a.id, &agent_b.id, vec![card_a.id], vec![]).await?;

    let repo = TradeRepository::new(db);

    assert!(!repo.resolve(&trade.id, &agent_a.id, TradeStatus::Accepted).await?);
    assert!(repo.resolve(&trade.id, &agent_b.id, TradeStatus::Declined).await?);
    assert!(!repo.resolve(&trade.id, &agent_b.id, TradeStatus::Accepted).await?);

    let history = repo.get_resolved_for_agent(&agent_a.id, 20).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, TradeStatus::Declined);
    assert!(history[0].resolved_at.is_some());

    Ok(())
}

/// Tests that pending trades are not part of the history.
///
/// Expected: empty history
#[tokio::test]
async fn history_excludes_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((agent_a, card_a), (agent_b, _)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    factory::create_trade(db, &agent_a.id, &agent_b.id, vec![card_a.id], vec![]).await?;

    let history = TradeRepository::new(db)
        .get_resolved_for_agent(&agent_b.id, 20)
        .await?;

    assert!(history.is_empty());

    Ok(())
}
