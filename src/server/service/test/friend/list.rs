use super::*;

/// Tests the friend list ordering and names.
///
/// Expected: friends from both directions sorted by name, pending requests excluded
#[tokio::test]
async fn lists_friends_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let zed = factory::agent::AgentFactory::new(db).name("Zed").build().await?;
    let amy = factory::agent::AgentFactory::new(db).name("Amy").build().await?;
    let pending = create_agent(db).await?;
    factory::create_friendship(db, &agent.id, &zed.id, "accepted").await?;
    factory::create_friendship(db, &amy.id, &agent.id, "accepted").await?;
    factory::create_friendship(db, &agent.id, &pending.id, "pending").await?;

    let friends = FriendService::new(db).list(&agent.id).await?;

    let names: Vec<&str> = friends.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zed"]);

    Ok(())
}

/// Tests removing a friend.
///
/// Expected: the relation is gone and a second removal is Err(NotFound)
#[tokio::test]
async fn removes_friend() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;
    factory::create_friendship(db, &other.id, &agent.id, "accepted").await?;

    let service = FriendService::new(db);
    service.remove(&agent.id, &other.id).await?;

    assert!(service.list(&agent.id).await?.is_empty());
    let again = service.remove(&agent.id, &other.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}
