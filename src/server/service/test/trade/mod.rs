use crate::server::{
    error::AppError,
    model::{agent::Agent, trade::TradeStatus},
    service::trade::TradeService,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod request;

async fn owner_of(
    db: &sea_orm::DatabaseConnection,
    card_id: &str,
) -> Result<Option<String>, AppError> {
    Ok(entity::prelude::Card::find_by_id(card_id.to_string())
        .one(db)
        .await?
        .and_then(|card| card.owner_agent_id))
}
