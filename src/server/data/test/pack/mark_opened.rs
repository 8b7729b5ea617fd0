use super::*;

/// Tests opening an unopened pack twice.
///
/// Verifies only the first call flips the flag, so a pack can never be opened twice.
///
/// Expected: true then false, opened_at set
#[tokio::test]
async fn opens_pack_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;

    let repo = PackRepository::new(db);
    let pack = repo.create(&agent.id, PackType::Premium).await?;

    assert!(repo.mark_opened(&pack.id).await?);
    assert!(!repo.mark_opened(&pack.id).await?);

    let stored = repo.find_by_id(&pack.id).await?.unwrap();
    assert!(stored.opened);
    assert!(stored.opened_at.is_some());
    assert_eq!(stored.pack_type, PackType::Premium);

    Ok(())
}
