//! Direct message factory.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread message.
pub async fn create_message(
    db: &DatabaseConnection,
    sender_agent_id: &str,
    recipient_agent_id: &str,
    body: &str,
) -> Result<entity::message::Model, DbErr> {
    create_message_at(db, sender_agent_id, recipient_agent_id, body, Utc::now()).await
}

/// Creates an unread message with an explicit timestamp.
///
/// Useful when ordering matters and rows would otherwise share a timestamp.
pub async fn create_message_at(
    db: &DatabaseConnection,
    sender_agent_id: &str,
    recipient_agent_id: &str,
    body: &str,
    created_at: DateTime<Utc>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        sender_agent_id: ActiveValue::Set(sender_agent_id.to_string()),
        recipient_agent_id: ActiveValue::Set(recipient_agent_id.to_string()),
        body: ActiveValue::Set(body.to_string()),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(created_at),
    }
    .insert(db)
    .await
}
