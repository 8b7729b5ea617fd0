use super::*;

/// Tests sending a message to an agent seen for the first time.
///
/// Expected: stored unread message and a message notification with a 50 char preview
#[tokio::test]
async fn sends_message_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = create_agent(db).await?;
    let text = "x".repeat(80);

    let message = MessageService::new(db)
        .send(&sender, "mb_listener", &text)
        .await?;

    assert!(!message.is_read);
    assert_eq!(message.sender_agent_id, sender.id);

    let notification = entity::prelude::Notification::find()
        .filter(
            entity::notification::Column::RecipientAgentId.eq(message.recipient_agent_id.as_str()),
        )
        .one(db)
        .await?
        .unwrap();
    assert_eq!(notification.notification_type, "message");
    assert_eq!(notification.message.chars().count(), 50);

    assert_eq!(
        MessageService::new(db)
            .unread_count(&message.recipient_agent_id)
            .await?,
        1
    );

    Ok(())
}

/// Tests rejected sends.
///
/// Expected: Err(BadRequest) for blank text and for messaging oneself
#[tokio::test]
async fn rejects_blank_and_self_messages() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = create_agent(db).await?;
    let other = create_agent(db).await?;

    let service = MessageService::new(db);
    let blank = service.send(&sender, &other.moltbook_id, "  ").await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let own = service.send(&sender, &sender.moltbook_id, "hi").await;
    assert!(matches!(own, Err(AppError::BadRequest(_))));

    assert_eq!(entity::prelude::Message::find().count(db).await?, 0);

    Ok(())
}

/// Tests read and delete permissions.
///
/// Expected: only the recipient marks read, only the sender deletes
#[tokio::test]
async fn read_by_recipient_deleted_by_sender() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sender = create_agent(db).await?;
    let recipient = create_agent(db).await?;
    let message = factory::create_message(db, &sender.id, &recipient.id, "hello").await?;

    let service = MessageService::new(db);
    let wrong_reader = service.mark_read(&sender.id, &message.id).await;
    assert!(matches!(wrong_reader, Err(AppError::NotFound(_))));
    service.mark_read(&recipient.id, &message.id).await?;
    assert_eq!(service.unread_count(&recipient.id).await?, 0);

    let wrong_deleter = service.delete(&recipient.id, &message.id).await;
    assert!(matches!(wrong_deleter, Err(AppError::NotFound(_))));
    service.delete(&sender.id, &message.id).await?;
    assert_eq!(entity::prelude::Message::find().count(db).await?, 0);

    Ok(())
}
