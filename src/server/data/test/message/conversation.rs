use super::*;

/// Tests fetching a conversation limited to the latest messages.
///
/// Verifies messages with a third agent are excluded and the result is
/// chronological.
///
/// Expected: the last two messages between the pair, oldest first
#[tokio::test]
async fn returns_latest_messages_chronologically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_agent(db).await?;
    let bob = factory::create_agent(db).await?;
    let carol = factory::create_agent(db).await?;
    let start = Utc::now() - Duration::minutes(10);

    factory::message::create_message_at(db, &alice.id, &bob.id, "one", start).await?;
    factory::message::create_message_at(db, &bob.id, &alice.id, "two", start + Duration::minutes(1))
        .await?;
    factory::message::create_message_at(db, &alice.id, &bob.id, "three", start + Duration::minutes(2))
        .await?;
    factory::message::create_message_at(db, &carol.id, &alice.id, "other", start + Duration::minutes(3))
        .await?;

    let messages = MessageRepository::new(db)
        .get_conversation(&alice.id, &bob.id, 2)
        .await?;

    let bodies: Vec<&str> = messages.iter().map(|m| m.body.as_str()).collect();
    assert_eq!(bodies, vec!["two", "three"]);

    Ok(())
}

/// Tests grouping an agent's messages by counterpart.
///
/// Verifies sent and received messages fall into the same group, the latest message
/// id is reported, and groups are ordered by their latest message.
///
/// Expected: carol's conversation first, then bob's with two messages
#[tokio::test]
async fn groups_recent_conversations_by_counterpart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let alice = factory::create_agent(db).await?;
    let bob = factory::create_agent(db).await?;
    let carol = factory::create_agent(db).await?;
    let start = Utc::now() - Duration::minutes(10);

    factory::message::create_message_at(db, &alice.id, &bob.id, "first", start).await?;
    let latest_bob = factory::message::create_message_at(
        db,
        &bob.id,
        &alice.id,
        "second",
        start + Duration::minutes(1),
    )
    .await?;
    let latest_carol = factory::message::create_message_at(
        db,
        &carol.id,
        &alice.id,
        "third",
        start + Duration::minutes(2),
    )
    .await?;
    factory::message::create_message_at(db, &bob.id, &carol.id, "unrelated", start + Duration::minutes(3))
        .await?;

    let repo = MessageRepository::new(db);
    let rows = repo.get_recent_conversations(&alice.id, 10).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].agent_id, carol.id);
    assert_eq!(rows[0].message_count, 1);
    assert_eq!(rows[0].last_message_id, latest_carol.id);
    assert_eq!(rows[1].agent_id, bob.id);
    assert_eq!(rows[1].message_count, 2);
    assert_eq!(rows[1].last_message_id, latest_bob.id);

    let limited = repo.get_recent_conversations(&alice.id, 1).await?;
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].agent_id, carol.id);

    let loaded = repo.get_by_ids(&[latest_bob.id.clone()]).await?;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].body, "second");

    Ok(())
}
