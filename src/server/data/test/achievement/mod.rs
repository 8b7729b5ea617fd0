use crate::server::{
    data::achievement::AchievementRepository,
    error::AppError,
    model::achievement::ACHIEVEMENTS,
};
use test_utils::{builder::TestBuilder, factory};
