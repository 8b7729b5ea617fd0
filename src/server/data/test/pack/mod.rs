use crate::server::{
    data::pack::PackRepository,
    error::AppError,
    model::pack::PackType,
};
use test_utils::{builder::TestBuilder, factory};

mod mark_opened;
mod get_unopened_by_owner;
