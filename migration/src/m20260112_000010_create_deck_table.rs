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
                    .table(Deck::Table)
                    .if_not_exists()
                    .col(string(Deck::Id).primary_key())
                    .col(string(Deck::AgentId))
                    .col(string(Deck::Name))
                    .col(text(Deck::Description).default(""))
                    .col(json(Deck::CardIds))
                    .col(boolean(Deck::IsActive).default(false))
                    .col(
                        timestamp_with_time_zone(Deck::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Deck::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deck_agent_id")
                            .from(Deck::Table, Deck::AgentId)
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
            .drop_table(Table::drop().table(Deck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Deck {
    #[sea_orm(iden = "decks")]
    Table,
    Id,
    AgentId,
    Name,
    Description,
    CardIds,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
