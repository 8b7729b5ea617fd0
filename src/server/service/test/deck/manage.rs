use super::*;

/// Tests creating a deck and filling it with owned cards.
///
/// Expected: empty inactive deck, then 2 cards resolved on get
#[tokio::test]
async fn creates_and_fills_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let (template, first) = factory::helpers::create_card_for_agent(db, &agent.id).await?;
    let second = factory::create_card(db, template.id, &agent.id).await?;

    let service = DeckService::new(db);
    let deck = service.create(&agent.id, "Main", Some("Fire")).await?;
    assert!(deck.card_ids.is_empty());
    assert!(!deck.is_active);
    assert_eq!(deck.description, "Fire");

    let count = service
        .update(&agent.id, &deck.id, vec![first.id.clone(), second.id.clone()])
        .await?;
    assert_eq!(count, 2);

    let detail = service.get(&agent.id, &deck.id).await?;
    assert_eq!(detail.deck.card_ids, vec![first.id, second.id]);
    assert_eq!(detail.cards.len(), 2);

    Ok(())
}

/// Tests adding a card the agent does not own.
///
/// Expected: Err(BadRequest) and the deck stays empty
#[tokio::test]
async fn rejects_foreign_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;
    let (_, foreign) = factory::helpers::create_card_for_agent(db, &other.id).await?;

    let service = DeckService::new(db);
    let deck = service.create(&agent.id, "Main", None).await?;
    let result = service
        .update(&agent.id, &deck.id, vec![foreign.id.clone()])
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => {
            assert_eq!(msg, format!("Card {} not found in your collection", foreign.id))
        }
        other => panic!("expected BadRequest, got {:?}", other),
    }
    assert!(service.get(&agent.id, &deck.id).await?.deck.card_ids.is_empty());

    Ok(())
}

/// Tests the deck limit and name check.
///
/// Expected: Err(BadRequest) for a blank name and for the deck past the limit
#[tokio::test]
async fn enforces_name_and_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;

    let service = DeckService::new(db);
    let blank = service.create(&agent.id, "   ", None).await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    for i in 0..MAX_DECKS {
        factory::deck::DeckFactory::new(db, agent.id.clone())
            .name(format!("Deck {}", i))
            .build()
            .await?;
    }
    let over = service.create(&agent.id, "One more", None).await;
    assert!(matches!(over, Err(AppError::BadRequest(_))));
    assert_eq!(service.list(&agent.id).await?.len(), MAX_DECKS as usize);

    Ok(())
}

/// Tests deleting a deck owned by another agent.
///
/// Expected: Err(NotFound) for the stranger, Ok for the owner
#[tokio::test]
async fn deletes_only_own_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;
    let deck = factory::create_deck(db, &agent.id).await?;

    let service = DeckService::new(db);
    let result = service.delete(&other.id, &deck.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    service.delete(&agent.id, &deck.id).await?;
    assert!(service.list(&agent.id).await?.is_empty());

    Ok(())
}
