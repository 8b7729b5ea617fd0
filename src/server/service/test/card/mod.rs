use super::create_agent;
use crate::server::{
    error::AppError,
    model::card::CreateCardTemplateParam,
    service::card::CardService,
};
use test_utils::{builder::TestBuilder, factory};

mod templates;
