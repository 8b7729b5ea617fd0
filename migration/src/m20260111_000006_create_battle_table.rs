use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_agent_table::Agent, m20260110_000004_create_card_table::Card,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battle::Table)
                    .if_not_exists()
                    .col(string(Battle::Id).primary_key())
                    .col(string(Battle::ChallengerId))
                    .col(string(Battle::DefenderId))
                    .col(string(Battle::ChallengerCardId))
                    .col(string_null(Battle::DefenderCardId))
                    .col(integer_null(Battle::ChallengerPower))
                    .col(integer_null(Battle::DefenderPower))
                    .col(string_null(Battle::WinnerId))
                    .col(string(Battle::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Battle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Battle::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_challenger_id")
                            .from(Battle::Table, Battle::ChallengerId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_defender_id")
                            .from(Battle::Table, Battle::DefenderId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_battle_challenger_card_id")
                            .from(Battle::Table, Battle::ChallengerCardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Battle {
    #[sea_orm(iden = "battles")]
    Table,
    Id,
    ChallengerId,
    DefenderId,
    ChallengerCardId,
    DefenderCardId,
    ChallengerPower,
    DefenderPower,
    WinnerId,
    Status,
    CreatedAt,
    CompletedAt,
}
