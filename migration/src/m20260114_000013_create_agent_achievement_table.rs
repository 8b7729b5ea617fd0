use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_agent_table::Agent,
    m20260114_000012_create_achievement_table::Achievement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgentAchievement::Table)
                    .if_not_exists()
                    .col(string(AgentAchievement::Id).primary_key())
                    .col(string(AgentAchievement::AgentId))
                    .col(string(AgentAchievement::AchievementId))
                    .col(
                        timestamp_with_time_zone(AgentAchievement::CompletedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_achievement_agent_id")
                            .from(AgentAchievement::Table, AgentAchievement::AgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_achievement_achievement_id")
                            .from(AgentAchievement::Table, AgentAchievement::AchievementId)
                            .to(Achievement::Table, Achievement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agent_achievement_unique")
                    .table(AgentAchievement::Table)
                    .col(AgentAchievement::AgentId)
                    .col(AgentAchievement::AchievementId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgentAchievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AgentAchievement {
    #[sea_orm(iden = "agent_achievements")]
    Table,
    Id,
    AgentId,
    AchievementId,
    CompletedAt,
}
