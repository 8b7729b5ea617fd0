use super::*;

/// Tests switching the active deck.
///
/// Verifies only one deck is active at a time.
///
/// Expected: the second deck active, the first deactivated
#[tokio::test]
async fn keeps_single_active_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let first = factory::deck::DeckFactory::new(db, agent.id.clone())
        .active(true)
        .build()
        .await?;
    let second = factory::create_deck(db, &agent.id).await?;

    let service = DeckService::new(db);
    service.set_active(&agent.id, &second.id).await?;

    let active = service.get_active(&agent.id).await?;
    assert_eq!(active.deck.id, second.id);
    let decks = service.list(&agent.id).await?;
    let active_count = decks.iter().filter(|d| d.is_active).count();
    assert_eq!(active_count, 1);
    assert!(decks.iter().any(|d| d.id == first.id && !d.is_active));

    Ok(())
}

/// Tests reading the active deck when none is set.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn no_active_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    factory::create_deck(db, &agent.id).await?;

    let result = DeckService::new(db).get_active(&agent.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests activating another agent's deck.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_foreign_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;
    let deck = factory::create_deck(db, &other.id).await?;

    let result = DeckService::new(db).set_active(&agent.id, &deck.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
