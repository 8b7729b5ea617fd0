//! Direct message data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Statement,
};

use crate::server::model::message::{ConversationRow, Message};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        sender_agent_id: &str,
        recipient_agent_id: &str,
        body: &str,
    ) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            sender_agent_id: ActiveValue::Set(sender_agent_id.to_string()),
            recipient_agent_id: ActiveValue::Set(recipient_agent_id.to_string()),
            body: ActiveValue::Set(body.to_string()),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets the last `limit` messages between two agents in chronological order.
    pub async fn get_conversation(
        &self,
        agent_id: &str,
        other_agent_id: &str,
        limit: u64,
    ) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::message::Column::SenderAgentId.eq(agent_id))
                            .add(entity::message::Column::RecipientAgentId.eq(other_agent_id)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::message::Column::SenderAgentId.eq(other_agent_id))
                            .add(entity::message::Column::RecipientAgentId.eq(agent_id)),
                    ),
            )
            .order_by_desc(entity::message::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().rev().map(Message::from_entity).collect())
    }

    /// Gets one row per counterpart the agent has exchanged messages with, most recent
    /// conversation first.
    ///
    /// Each row carries the message count and the id of the latest message; the caller
    /// loads those messages with `get_by_ids`.
    pub async fn get_recent_conversations(
        &self,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<ConversationRow>, DbErr> {
        let sql = r#"WITH mine AS (
                         SELECT id,
                                created_at,
                                CASE WHEN sender_agent_id = ? THEN recipient_agent_id
                                     ELSE sender_agent_id END AS other_agent_id
                         FROM messages
                         WHERE sender_agent_id = ? OR recipient_agent_id = ?
                     )
                     SELECT g.other_agent_id AS agent_id,
                            g.message_count AS message_count,
                            (SELECT m.id FROM mine m
                             WHERE m.other_agent_id = g.other_agent_id
                             ORDER BY m.created_at DESC
                             LIMIT 1) AS last_message_id
                     FROM (SELECT other_agent_id,
                                  COUNT(*) AS message_count,
                                  MAX(created_at) AS last_message_at
                           FROM mine
                           GROUP BY other_agent_id) g
                     ORDER BY g.last_message_at DESC
                     LIMIT ?"#;

        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [
                agent_id.into(),
                agent_id.into(),
                agent_id.into(),
                (limit.min(i64::MAX as u64) as i64).into(),
            ],
        );

        ConversationRow::find_by_statement(statement)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(&self, message_ids: &[String]) -> Result<Vec<Message>, DbErr> {
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::Id.is_in(message_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    /// Marks an unread message addressed to the agent read.
    ///
    /// # Returns
    /// - `Ok(false)` - Message not addressed to the agent, or already read
    pub async fn mark_read(&self, message_id: &str, agent_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::update_many()
            .col_expr(entity::message::Column::IsRead, Expr::value(true))
            .filter(entity::message::Column::Id.eq(message_id))
            .filter(entity::message::Column::RecipientAgentId.eq(agent_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn unread_count(&self, agent_id: &str) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::RecipientAgentId.eq(agent_id))
            .filter(entity::message::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Deletes a message the agent sent.
    pub async fn delete(&self, message_id: &str, agent_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_many()
            .filter(entity::message::Column::Id.eq(message_id))
            .filter(entity::message::Column::SenderAgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
