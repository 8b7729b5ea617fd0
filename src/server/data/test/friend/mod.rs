use crate::server::{
    data::friend::FriendRepository,
    error::AppError,
    model::friend::FriendStatus,
};
use test_utils::{builder::TestBuilder, factory};

mod lookup;
