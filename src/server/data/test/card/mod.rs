use crate::server::{
    data::{card::CardRepository, card_template::CardTemplateRepository},
    error::AppError,
    model::{
        card::{CreateCardTemplateParam, Rarity, StatModifiers},
        pack::CardDraw,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_by_owner;
mod mint;
mod template;
