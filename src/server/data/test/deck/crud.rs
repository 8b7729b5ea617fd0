use super::*;

/// Tests creating a deck and replacing its cards.
///
/// Expected: empty deck after creation, new card list after update
#[tokio::test]
async fn creates_and_updates_cards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let repo = DeckRepository::new(db);
    let deck = repo.create(&agent.id, "Aggro", "Fast deck").await?;
    assert!(deck.card_ids.is_empty());
    assert!(!deck.is_active);

    repo.set_cards(&deck.id, &["c1".to_string(), "c2".to_string()])
        .await?;

    let stored = repo.find_for_agent(&deck.id, &agent.id).await?.unwrap();
    assert_eq!(stored.card_ids, vec!["c1".to_string(), "c2".to_string()]);
    assert_eq!(stored.description, "Fast deck");
    assert_eq!(repo.count_by_agent(&agent.id).await?, 1);

    Ok(())
}

/// Tests that decks of other agents are invisible and undeletable.
///
/// Expected: None and false for the stranger
#[tokio::test]
async fn scopes_decks_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    let stranger = factory::create_agent(db).await?;
    let deck = factory::create_deck(db, &agent.id).await?;

    let repo = DeckRepository::new(db);

    assert!(repo.find_for_agent(&deck.id, &stranger.id).await?.is_none());
    assert!(!repo.delete(&deck.id, &stranger.id).await?);
    assert!(repo.delete(&deck.id, &agent.id).await?);
    assert!(repo.get_by_agent(&agent.id).await?.is_empty());

    Ok(())
}
