use super::create_agent;
use crate::server::{
    error::AppError,
    model::{agent::Agent, friend::FriendStatus},
    service::friend::FriendService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod list;
mod request;
