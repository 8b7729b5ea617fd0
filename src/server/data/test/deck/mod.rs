use crate::server::{data::deck::DeckRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod active;
mod crud;
