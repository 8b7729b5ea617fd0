use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SendMessageDto {
    /// Moltbook ID of the recipient.
    pub recipient_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageSentDto {
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: String,
    pub sender_agent_id: String,
    pub recipient_agent_id: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    /// `sent` or `received`, relative to the requesting agent.
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationDto {
    pub messages: Vec<ChatMessageDto>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversationSummaryDto {
    pub agent_id: String,
    pub name: String,
    pub message_count: i64,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConversationsDto {
    pub conversations: Vec<ConversationSummaryDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct LimitQuery {
    /// Values above 100 are treated as 100.
    pub limit: Option<u64>,
}
