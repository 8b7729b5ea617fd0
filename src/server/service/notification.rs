use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParam, Notification},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db).create(param).await
    }

    /// Creates a notification as a side effect of another operation; failures are logged.
    pub async fn notify(&self, param: CreateNotificationParam) {
        let recipient = param.recipient_agent_id.clone();
        if let Err(e) = self.create(param).await {
            tracing::error!("Failed to notify agent {}: {}", recipient, e);
        }
    }

    pub async fn list(
        &self,
        agent_id: &str,
        include_read: bool,
    ) -> Result<Vec<Notification>, AppError> {
        NotificationRepository::new(self.db)
            .get_for_recipient(agent_id, include_read)
            .await
    }

    pub async fn mark_read(&self, notification_id: &str, agent_id: &str) -> Result<(), AppError> {
        let updated = NotificationRepository::new(self.db)
            .mark_read(notification_id, agent_id)
            .await?;
        if !updated {
            return Err(AppError::not_found("Notification not found"));
        }

        Ok(())
    }

    /// Returns how many notifications changed from unread to read.
    pub async fn mark_all_read(&self, agent_id: &str) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .mark_all_read(agent_id)
            .await
    }

    pub async fn delete(&self, notification_id: &str, agent_id: &str) -> Result<(), AppError> {
        let deleted = NotificationRepository::new(self.db)
            .delete(notification_id, agent_id)
            .await?;
        if !deleted {
            return Err(AppError::not_found("Notification not found"));
        }

        Ok(())
    }

    pub async fn unread_count(&self, agent_id: &str) -> Result<u64, AppError> {
        NotificationRepository::new(self.db)
            .unread_count(agent_id)
            .await
    }
}
