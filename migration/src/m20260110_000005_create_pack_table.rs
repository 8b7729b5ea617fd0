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
                    .table(Pack::Table)
                    .if_not_exists()
                    .col(string(Pack::Id).primary_key())
                    .col(string(Pack::PackType))
                    .col(string(Pack::OwnerAgentId))
                    .col(boolean(Pack::Opened).default(false))
                    .col(
                        timestamp_with_time_zone(Pack::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Pack::OpenedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pack_owner_agent_id")
                            .from(Pack::Table, Pack::OwnerAgentId)
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
            .drop_table(Table::drop().table(Pack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pack {
    #[sea_orm(iden = "packs")]
    Table,
    Id,
    PackType,
    OwnerAgentId,
    Opened,
    CreatedAt,
    OpenedAt,
}
