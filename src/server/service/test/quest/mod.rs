use super::create_agent;
use crate::server::{
    error::AppError,
    model::quest::{AgentQuestStatus, QuestGoal, QuestType, QUESTS},
    service::quest::QuestService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod lifecycle;
