use std::collections::HashMap;

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::{agent::AgentRepository, message::MessageRepository},
    error::AppError,
    model::{
        agent::Agent,
        message::{ConversationSummary, Message},
        notification::{CreateNotificationParam, NotificationType},
    },
    service::{agent::AgentService, notification::NotificationService, MAX_PAGE_SIZE},
};

pub const CONVERSATION_LIMIT: u64 = 50;
pub const RECENT_CONVERSATIONS_LIMIT: u64 = 10;

/// Length of the message preview put into the recipient's notification.
const PREVIEW_CHARS: usize = 50;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a direct message; no friendship is required.
    ///
    /// # Returns
    /// - `Ok(Message)` - Stored message
    /// - `Err(AppError::BadRequest)` - Empty text or message to self
    pub async fn send(
        &self,
        sender: &Agent,
        recipient_moltbook_id: &str,
        text: &str,
    ) -> Result<Message, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::bad_request("Message cannot be empty"));
        }

        let recipient = AgentService::new(self.db)
            .get_or_create(recipient_moltbook_id, recipient_moltbook_id)
            .await?;
        if recipient.id == sender.id {
            return Err(AppError::bad_request("You can't message yourself"));
        }

        let message = MessageRepository::new(self.db)
            .create(&sender.id, &recipient.id, text)
            .await?;

        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    recipient.id.as_str(),
                    NotificationType::Message,
                    format!("New message from {}", sender.name),
                    preview,
                )
                .with_data(json!({ "message_id": message.id, "sender_agent_id": sender.id })),
            )
            .await;

        Ok(message)
    }

    /// The last `limit` messages between two agents, oldest first.
    ///
    /// `limit` is capped at `MAX_PAGE_SIZE`.
    pub async fn conversation(
        &self,
        agent_id: &str,
        other_agent_id: &str,
        limit: u64,
    ) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(self.db)
            .get_conversation(agent_id, other_agent_id, limit.min(MAX_PAGE_SIZE))
            .await?)
    }

    /// One summary per counterpart, most recent conversation first.
    ///
    /// `limit` is capped at `MAX_PAGE_SIZE`.
    pub async fn recent_conversations(
        &self,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<ConversationSummary>, AppError> {
        let repo = MessageRepository::new(self.db);
        let rows = repo
            .get_recent_conversations(agent_id, limit.min(MAX_PAGE_SIZE))
            .await?;

        let message_ids: Vec<String> = rows.iter().map(|r| r.last_message_id.clone()).collect();
        let mut last_messages: HashMap<String, Message> = repo
            .get_by_ids(&message_ids)
            .await?
            .into_iter()
            .map(|message| (message.id.clone(), message))
            .collect();

        let agent_ids: Vec<String> = rows.iter().map(|r| r.agent_id.clone()).collect();
        let names = AgentRepository::new(self.db).names_by_ids(&agent_ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let last = last_messages.remove(&row.last_message_id)?;
                Some(ConversationSummary {
                    name: names
                        .get(&row.agent_id)
                        .cloned()
                        .unwrap_or_else(|| row.agent_id.clone()),
                    agent_id: row.agent_id,
                    message_count: row.message_count,
                    last_message: last.body,
                    last_message_at: last.created_at,
                })
            })
            .collect())
    }

    pub async fn mark_read(&self, agent_id: &str, message_id: &str) -> Result<(), AppError> {
        if !MessageRepository::new(self.db)
            .mark_read(message_id, agent_id)
            .await?
        {
            return Err(AppError::not_found("Message not found"));
        }

        Ok(())
    }

    pub async fn unread_count(&self, agent_id: &str) -> Result<u64, AppError> {
        Ok(MessageRepository::new(self.db)
            .unread_count(agent_id)
            .await?)
    }

    /// Deletes a message the agent sent.
    pub async fn delete(&self, agent_id: &str, message_id: &str) -> Result<(), AppError> {
        if !MessageRepository::new(self.db)
            .delete(message_id, agent_id)
            .await?
        {
            return Err(AppError::not_found("Message not found"));
        }

        Ok(())
    }
}
