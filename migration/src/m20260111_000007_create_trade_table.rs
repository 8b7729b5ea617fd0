use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_agent_table::Agent;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trade::Table)
                    .if_not_exists()
                    .col(string(Trade::Id).primary_key())
                    .col(string(Trade::FromAgentId))
                    .col(string(Trade::ToAgentId))
                    .col(json(Trade::OfferedCardIds))
                    .col(json(Trade::WantedCardIds))
                    .col(string(Trade::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Trade::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Trade::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_from_agent_id")
                            .from(Trade::Table, Trade::FromAgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trade_to_agent_id")
                            .from(Trade::Table, Trade::ToAgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trade {
    #[sea_orm(iden = "trades")]
    Table,
    Id,
    FromAgentId,
    ToAgentId,
    OfferedCardIds,
    WantedCardIds,
    Status,
    CreatedAt,
    ResolvedAt,
}
