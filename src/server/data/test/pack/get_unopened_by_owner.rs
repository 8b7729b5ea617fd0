use super::*;

/// Tests listing unopened packs.
///
/// Expected: only the agent's unopened packs
#[tokio::test]
async fn lists_only_unopened_packs_of_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = factory::create_agent(db).await?;
    let other = factory::create_agent(db).await?;

    let unopened = factory::create_pack(db, &agent.id, "starter").await?;
    factory::pack::PackFactory::new(db, agent.id.clone())
        .opened(true)
        .build()
        .await?;
    factory::create_pack(db, &other.id, "standard").await?;

    let packs = PackRepository::new(db)
        .get_unopened_by_owner(&agent.id)
        .await?;

    assert_eq!(packs.len(), 1);
    assert_eq!(packs[0].id, unopened.id);
    assert_eq!(packs[0].pack_type, PackType::Starter);

    Ok(())
}
