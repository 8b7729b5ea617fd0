use super::*;

/// Tests that accepted friendships count from both sides.
///
/// Expected: each side sees one friend; pending rows are not counted
#[tokio::test]
async fn accepted_friendships_match_either_direction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_agent(db).await?;
    let bob = factory::create_agent(db).await?;
    let carol = factory::create_agent(db).await?;
    factory::create_friendship(db, &alice.id, &bob.id, "accepted").await?;
    factory::create_friendship(db, &carol.id, &alice.id, "pending").await?;

    let repo = FriendRepository::new(db);

    assert_eq!(repo.count_accepted_for_agent(&alice.id).await?, 1);
    assert_eq!(repo.count_accepted_for_agent(&bob.id).await?, 1);
    let bobs = repo.get_accepted_for_agent(&bob.id).await?;
    assert_eq!(bobs[0].other_party(&bob.id), alice.id);

    assert_eq!(repo.get_incoming(&alice.id).await?.len(), 1);
    assert_eq!(repo.get_outgoing(&carol.id).await?.len(), 1);
    assert!(repo.get_outgoing(&alice.id).await?.is_empty());

    Ok(())
}

/// Tests finding and deleting the relations between two agents.
///
/// Expected: both directions found and removed
#[tokio::test]
async fn finds_and_deletes_between() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_agent(db).await?;
    let bob = factory::create_agent(db).await?;
    factory::create_friendship(db, &bob.id, &alice.id, "accepted").await?;

    let repo = FriendRepository::new(db);

    assert_eq!(repo.find_between(&alice.id, &bob.id).await?.len(), 1);
    assert_eq!(repo.delete_between(&alice.id, &bob.id).await?, 1);
    assert!(repo.find_between(&bob.id, &alice.id).await?.is_empty());

    Ok(())
}
