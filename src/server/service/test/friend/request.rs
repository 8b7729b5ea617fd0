use super::*;

/// Tests sending a request to an unseen agent and accepting it.
///
/// Expected: pending request, then both sides list each other as friends
#[tokio::test]
async fn sends_and_accepts_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;

    let service = FriendService::new(db);
    let request = service.send_request(&agent, "mb_pal").await?;
    assert_eq!(request.status, FriendStatus::Pending);

    let pal = entity::prelude::Agent::find_by_id(request.friend_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(pal.moltbook_id, "mb_pal");
    let pal = Agent::from_entity(pal);

    assert_eq!(service.incoming(&pal.id).await?.len(), 1);
    assert_eq!(service.outgoing(&agent.id).await?.len(), 1);

    service.accept(&pal, &request.id).await?;

    let friends = service.list(&agent.id).await?;
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].agent_id, pal.id);
    let friends = service.list(&pal.id).await?;
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].agent_id, agent.id);
    assert!(service.incoming(&pal.id).await?.is_empty());

    // request + acceptance
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 2);

    Ok(())
}

/// Tests duplicate requests in either direction.
///
/// Expected: Err(Conflict) while pending and after accepting
#[tokio::test]
async fn rejects_duplicate_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;

    let service = FriendService::new(db);
    let request = service.send_request(&agent, &other.moltbook_id).await?;

    let reverse = service.send_request(&other, &agent.moltbook_id).await;
    assert!(matches!(reverse, Err(AppError::Conflict(_))));

    service.accept(&other, &request.id).await?;

    let again = service.send_request(&agent, &other.moltbook_id).await;
    match again {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, "Already friends"),
        other => panic!("expected Conflict, got {:?}", other.map(|f| f.id)),
    }

    Ok(())
}

/// Tests requesting again after a decline.
///
/// Expected: the declined row is replaced by a new pending request
#[tokio::test]
async fn allows_new_request_after_decline() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;
    factory::create_friendship(db, &agent.id, &other.id, "declined").await?;

    let request = FriendService::new(db)
        .send_request(&agent, &other.moltbook_id)
        .await?;

    assert_eq!(request.status, FriendStatus::Pending);
    assert_eq!(entity::prelude::Friend::find().count(db).await?, 1);

    Ok(())
}

/// Tests befriending oneself.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_self_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;

    let result = FriendService::new(db)
        .send_request(&agent, &agent.moltbook_id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests accepting or declining a request that was sent by the agent itself.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn only_recipient_resolves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let agent = create_agent(db).await?;
    let other = create_agent(db).await?;
    let request = factory::create_friendship(db, &agent.id, &other.id, "pending").await?;

    let service = FriendService::new(db);
    let accept = service.accept(&agent, &request.id).await;
    assert!(matches!(accept, Err(AppError::NotFound(_))));
    let decline = service.decline(&agent.id, &request.id).await;
    assert!(matches!(decline, Err(AppError::NotFound(_))));

    service.decline(&other.id, &request.id).await?;
    assert!(service.incoming(&other.id).await?.is_empty());

    Ok(())
}
