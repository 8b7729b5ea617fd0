use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;

use crate::model::message::{ChatMessageDto, ConversationSummaryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub sender_agent_id: String,
    pub recipient_agent_id: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            sender_agent_id: entity.sender_agent_id,
            recipient_agent_id: entity.recipient_agent_id,
            body: entity.body,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    /// Converts to a DTO with `direction` relative to `viewer_id`.
    pub fn into_dto(self, viewer_id: &str) -> ChatMessageDto {
        let direction = if self.sender_agent_id == viewer_id {
            "sent"
        } else {
            "received"
        };
        ChatMessageDto {
            id: self.id,
            sender_agent_id: self.sender_agent_id,
            recipient_agent_id: self.recipient_agent_id,
            message: self.body,
            is_read: self.is_read,
            created_at: self.created_at,
            direction: direction.to_string(),
        }
    }
}

/// Per-counterpart aggregate read by `MessageRepository::get_recent_conversations`.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ConversationRow {
    pub agent_id: String,
    pub message_count: i64,
    pub last_message_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub agent_id: String,
    pub name: String,
    pub message_count: i64,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
}

impl ConversationSummary {
    pub fn into_dto(self) -> ConversationSummaryDto {
        ConversationSummaryDto {
            agent_id: self.agent_id,
            name: self.name,
            message_count: self.message_count,
            last_message: self.last_message,
            last_message_at: self.last_message_at,
        }
    }
}
