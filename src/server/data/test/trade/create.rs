use super::*;

/// Tests creating a trade with offered and wanted cards.
///
/// Expected: pending trade whose card ID lists survive the JSON column
#[tokio::test]
async fn stores_card_id_lists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((agent_a, card_a), (agent_b, card_b)) =
        factory::helpers::create_two_agents_with_cards(db).await?;

    let trade = TradeRepository::new(db)
        .create(
            &agent_a.id,
            &agent_b.id,
            &[card_a.id.clone()],
            &[card_b.id.clone()],
        )
        .await?;

    assert_eq!(trade.status, TradeStatus::Pending);
    assert_eq!(trade.offered_card_ids, vec![card_a.id]);
    assert_eq!(trade.wanted_card_ids, vec![card_b.id]);
    assert!(trade.resolved_at.is_none());

    Ok(())
}
