use crate::server::{
    error::AppError,
    model::{
        agent::Agent,
        battle::{BattleOutcome, BattleStatus, ELO_LOSS, ELO_WIN},
        pack::PackType,
    },
    service::battle::BattleService,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod accept;

async fn stats_of(
    db: &DatabaseConnection,
    agent_id: &str,
) -> Result<entity::agent_stats::Model, AppError> {
    Ok(entity::prelude::AgentStats::find_by_id(agent_id.to_string())
        .one(db)
        .await?
        .unwrap())
}
