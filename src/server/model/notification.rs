use chrono::{DateTime, Utc};

use crate::{model::notification::NotificationDto, server::error::AppError};

string_enum! {
    pub enum NotificationType {
        Battle => "battle",
        Trade => "trade",
        Friend => "friend",
        Message => "message",
        Achievement => "achievement",
        Quest => "quest",
        System => "system",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub recipient_agent_id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            recipient_agent_id: entity.recipient_agent_id,
            notification_type: NotificationType::from_stored(&entity.notification_type)?,
            title: entity.title,
            message: entity.message,
            data: entity.data,
            is_read: entity.is_read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            notification_type: self.notification_type.as_str().to_string(),
            title: self.title,
            message: self.message,
            data: self.data,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub recipient_agent_id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl CreateNotificationParam {
    pub fn new(
        recipient_agent_id: impl Into<String>,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            recipient_agent_id: recipient_agent_id.into(),
            notification_type,
            title: title.into(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}
