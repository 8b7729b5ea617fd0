use super::*;

/// Tests settling a one-for-one trade.
///
/// Verifies both cards change hands and each side's counters move.
///
/// Expected: swapped owners, trades_completed 1 and cards_collected 1 for both agents
#[tokio::test]
async fn swaps_cards_and_updates_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, from_card), (to, to_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let trade = factory::create_trade(
        db,
        &from.id,
        &to.id,
        vec![from_card.id.clone()],
        vec![to_card.id.clone()],
    )
    .await?;

    let accepted = TradeService::new(db)
        .accept(&Agent::from_entity(to.clone()), &trade.id)
        .await?;

    assert_eq!(accepted.status, TradeStatus::Accepted);
    assert_eq!(owner_of(db, &from_card.id).await?, Some(to.id.clone()));
    assert_eq!(owner_of(db, &to_card.id).await?, Some(from.id.clone()));

    for agent_id in [&from.id, &to.id] {
        let stats = entity::prelude::AgentStats::find_by_id(agent_id.clone())
            .one(db)
            .await?
            .unwrap();
        assert_eq!(stats.trades_completed, 1);
        assert_eq!(stats.cards_collected, 1);
    }

    Ok(())
}

/// Tests a gift: cards offered, nothing wanted.
///
/// Expected: recipient owns the card, requester's cards_collected unchanged
#[tokio::test]
async fn settles_one_sided_offer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, from_card), (to, _)) = factory::helpers::create_two_agents_with_cards(db).await?;
    let trade =
        factory::create_trade(db, &from.id, &to.id, vec![from_card.id.clone()], Vec::new())
            .await?;

    TradeService::new(db)
        .accept(&Agent::from_entity(to.clone()), &trade.id)
        .await?;

    assert_eq!(owner_of(db, &from_card.id).await?, Some(to.id.clone()));
    let from_stats = entity::prelude::AgentStats::find_by_id(from.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(from_stats.cards_collected, 0);
    assert_eq!(from_stats.trades_completed, 1);

    Ok(())
}

/// Tests accepting after the requester lost an offered card.
///
/// Verifies the whole trade is rolled back.
///
/// Expected: Err(Conflict), trade still pending, wanted card still with the recipient
#[tokio::test]
async fn aborts_when_offered_card_moved() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, from_card), (to, to_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;
    let third = factory::create_agent(db).await?;
    let trade = factory::create_trade(
        db,
        &from.id,
        &to.id,
        vec![from_card.id.clone()],
        vec![to_card.id.clone()],
    )
    .await?;

    entity::prelude::Card::update_many()
        .col_expr(
            entity::card::Column::OwnerAgentId,
            sea_orm::sea_query::Expr::value(third.id.clone()),
        )
        .filter(entity::card::Column::Id.eq(from_card.id.as_str()))
        .exec(db)
        .await?;

    let result = TradeService::new(db)
        .accept(&Agent::from_entity(to.clone()), &trade.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = entity::prelude::Trade::find_by_id(trade.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TradeStatus::Pending.as_str());
    assert_eq!(owner_of(db, &to_card.id).await?, Some(to.id));

    Ok(())
}

/// Tests accepting a trade addressed to someone else.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_trade_for_other_agent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, from_card), (to, _)) = factory::helpers::create_two_agents_with_cards(db).await?;
    let trade =
        factory::create_trade(db, &from.id, &to.id, vec![from_card.id.clone()], Vec::new())
            .await?;

    let result = TradeService::new(db)
        .accept(&Agent::from_entity(from), &trade.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
