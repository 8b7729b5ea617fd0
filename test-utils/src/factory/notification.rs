//! Notification factory.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread `"system"` notification for the agent.
pub async fn create_notification(
    db: &DatabaseConnection,
    recipient_agent_id: &str,
) -> Result<entity::notification::Model, DbErr> {
    create_notification_with_read(db, recipient_agent_id, false).await
}

/// Creates a `"system"` notification with the given read flag.
pub async fn create_notification_with_read(
    db: &DatabaseConnection,
    recipient_agent_id: &str,
    is_read: bool,
) -> Result<entity::notification::Model, DbErr> {
    entity::notification::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        recipient_agent_id: ActiveValue::Set(recipient_agent_id.to_string()),
        notification_type: ActiveValue::Set("system".to_string()),
        title: ActiveValue::Set("Test".to_string()),
        message: ActiveValue::Set("Test notification".to_string()),
        data: ActiveValue::Set(None),
        is_read: ActiveValue::Set(is_read),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
