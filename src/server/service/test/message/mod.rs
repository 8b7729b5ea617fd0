use super::create_agent;
use crate::server::{
    error::AppError,
    service::{message::MessageService, MAX_PAGE_SIZE},
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod send;
