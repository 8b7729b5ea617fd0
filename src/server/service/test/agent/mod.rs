use crate::server::{
    error::AppError,
    model::agent::SIGNUP_STARTER_PACKS,
    service::agent::AgentService,
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod daily_login;
mod get_or_create;
