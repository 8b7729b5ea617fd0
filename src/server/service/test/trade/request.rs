use super::*;

/// Tests offering one card for one of the other agent's cards.
///
/// Expected: pending trade with both card lists and a trade notification for the recipient
#[tokio::test]
async fn creates_pending_trade() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, from_card), (to, to_card)) =
        factory::helpers::create_two_agents_with_cards(db).await?;

    let trade = TradeService::new(db)
        .request(
            &Agent::from_entity(from),
            &to.moltbook_id,
            vec![from_card.id.clone()],
            vec![to_card.id.clone()],
        )
        .await?;

    assert_eq!(trade.status, TradeStatus::Pending);
    assert_eq!(trade.to_agent_id, to.id);
    assert_eq!(trade.offered_card_ids, vec![from_card.id]);
    assert_eq!(trade.wanted_card_ids, vec![to_card.id]);

    let notifications = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientAgentId.eq(to.id.as_str()))
        .filter(entity::notification::Column::NotificationType.eq("trade"))
        .count(db)
        .await?;
    assert_eq!(notifications, 1);

    Ok(())
}

/// Tests offering a card the requester does not own.
///
/// Expected: Err(BadRequest) naming the card, no trade stored
#[tokio::test]
async fn rejects_unowned_offer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, _), (to, to_card)) = factory::helpers::create_two_agents_with_cards(db).await?;

    let result = TradeService::new(db)
        .request(
            &Agent::from_entity(from),
            &to.moltbook_id,
            vec![to_card.id.clone()],
            Vec::new(),
        )
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, format!("You don't own card {}", to_card.id))
        }
        other => panic!("expected BadRequest, got {:?}", other.map(|t| t.id)),
    }
    assert_eq!(entity::prelude::Trade::find().count(db).await?, 0);

    Ok(())
}

/// Tests the structural checks on the offer.
///
/// Expected: Err(BadRequest) for an empty offer, a repeated card and a self-trade
#[tokio::test]
async fn rejects_malformed_offers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let ((from, from_card), (to, _)) = factory::helpers::create_two_agents_with_cards(db).await?;
    let from = Agent::from_entity(from);
    let service = TradeService::new(db);

    let empty = service
        .request(&from, &to.moltbook_id, Vec::new(), Vec::new())
        .await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    let duplicate = service
        .request(
            &from,
            &to.moltbook_id,
            vec![from_card.id.clone(), from_card.id.clone()],
            Vec::new(),
        )
        .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let own = service
        .request(&from, &from.moltbook_id, vec![from_card.id.clone()], Vec::new())
        .await;
    assert!(matches!(own, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests declining as the recipient and as the requester.
///
/// Expected: requester gets Err(NotFound), recipient declines and cards stay put
#[tokio::test]
async fn recipient_declines() -> Result<(), AppError> {
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

    let service = TradeService::new(db);
    let result = service.decline(&from.id, &trade.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service.decline(&to.id, &trade.id).await?;

    let stored = entity::prelude::Trade::find_by_id(trade.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TradeStatus::Declined.as_str());
    assert!(stored.resolved_at.is_some());
    assert_eq!(owner_of(db, &from_card.id).await?, Some(from.id));

    Ok(())
}
