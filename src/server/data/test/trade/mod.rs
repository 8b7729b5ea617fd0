use crate::server::{
    data::trade::TradeRepository,
    error::AppError,
    model::trade::TradeStatus,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod resolve;
