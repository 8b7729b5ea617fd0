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
                    .table(AgentStats::Table)
                    .if_not_exists()
                    .col(string(AgentStats::AgentId).primary_key())
                    .col(integer(AgentStats::Elo).default(1000))
                    .col(integer(AgentStats::Wins).default(0))
                    .col(integer(AgentStats::Losses).default(0))
                    .col(integer(AgentStats::Draws).default(0))
                    .col(integer(AgentStats::PacksOpened).default(0))
                    .col(integer(AgentStats::CardsCollected).default(0))
                    .col(integer(AgentStats::TradesCompleted).default(0))
                    .col(integer(AgentStats::BattlesSinceLastPack).default(0))
                    .col(integer_null(AgentStats::WeeklyLeaderboardRank))
                    .col(integer_null(AgentStats::LastWeeklyReward))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_stats_agent_id")
                            .from(AgentStats::Table, AgentStats::AgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agent_stats_elo")
                    .table(AgentStats::Table)
                    .col(AgentStats::Elo)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgentStats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AgentStats {
    #[sea_orm(iden = "agent_stats")]
    Table,
    AgentId,
    Elo,
    Wins,
    Losses,
    Draws,
    PacksOpened,
    CardsCollected,
    TradesCompleted,
    BattlesSinceLastPack,
    WeeklyLeaderboardRank,
    LastWeeklyReward,
}
