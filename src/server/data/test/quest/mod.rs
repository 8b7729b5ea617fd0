use crate::server::{
    data::quest::QuestRepository,
    error::AppError,
    model::quest::{AgentQuestStatus, QuestGoal, QuestType, QUESTS},
};
use test_utils::{builder::TestBuilder, factory};

mod reset_type;
