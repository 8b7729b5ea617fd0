use crate::server::{
    data::{agent::AgentRepository, agent_stats::AgentStatsRepository},
    model::agent::StatsDelta,
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod claim_daily_login;
mod stats;
