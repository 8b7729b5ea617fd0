use super::*;

/// Tests switching the active deck.
///
/// Verifies activating one deck deactivates the previously active one.
///
/// Expected: exactly one active deck, the last one set
#[tokio::test]
async fn keeps_single_active_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    let first = factory::deck::DeckFactory::new(db, agent.id.clone())
        .active(true)
        .build()
        .await?;
    let second = factory::create_deck(db, &agent.id).await?;

    let repo = DeckRepository::new(db);
    repo.set_active(&second.id, &agent.id).await?;

    let decks = repo.get_by_agent(&agent.id).await?;
    let active: Vec<&str> = decks
        .iter()
        .filter(|d| d.is_active)
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(active, vec![second.id.as_str()]);
    assert_ne!(active[0], first.id);
    assert_eq!(repo.find_active(&agent.id).await?.unwrap().id, second.id);

    Ok(())
}

/// Tests looking up the active deck when none is set.
///
/// Expected: None
#[tokio::test]
async fn no_active_deck() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    factory::create_deck(db, &agent.id).await?;

    assert!(DeckRepository::new(db).find_active(&agent.id).await?.is_none());

    Ok(())
}
