use super::create_agent;
use crate::server::{
    error::AppError,
    model::notification::{CreateNotificationParam, NotificationType},
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};
