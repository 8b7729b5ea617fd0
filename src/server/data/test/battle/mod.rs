use crate::server::{
    data::battle::BattleRepository,
    error::AppError,
    model::battle::{BattleStatus, CompleteBattleParam},
};
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod decline;
