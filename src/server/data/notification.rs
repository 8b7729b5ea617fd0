//! Notification data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParam, Notification},
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        let entity = entity::notification::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            recipient_agent_id: ActiveValue::Set(param.recipient_agent_id),
            notification_type: ActiveValue::Set(param.notification_type.as_str().to_string()),
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            data: ActiveValue::Set(param.data),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Notification::from_entity(entity)
    }

    /// Gets an agent's notifications, newest first.
    ///
    /// # Arguments
    /// - `agent_id` - Recipient
    /// - `include_read` - Whether to include notifications already marked read
    pub async fn get_for_recipient(
        &self,
        agent_id: &str,
        include_read: bool,
    ) -> Result<Vec<Notification>, AppError> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientAgentId.eq(agent_id));
        if !include_read {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let entities = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Notification::from_entity).collect()
    }

    /// Marks one of the agent's notifications read.
    ///
    /// # Returns
    /// - `Ok(false)` - No notification with that ID belongs to the agent
    pub async fn mark_read(&self, notification_id: &str, agent_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::RecipientAgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of the agent read and returns how many changed.
    pub async fn mark_all_read(&self, agent_id: &str) -> Result<u64, AppError> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::RecipientAgentId.eq(agent_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, notification_id: &str, agent_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Notification::delete_many()
            .filter(entity::notification::Column::Id.eq(notification_id))
            .filter(entity::notification::Column::RecipientAgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn unread_count(&self, agent_id: &str) -> Result<u64, AppError> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientAgentId.eq(agent_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
