use crate::server::{data::leaderboard::LeaderboardRepository, model::leaderboard::LeaderboardSort};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod top;
