use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_agent_table::Agent, m20260115_000014_create_quest_table::Quest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgentQuest::Table)
                    .if_not_exists()
                    .col(string(AgentQuest::Id).primary_key())
                    .col(string(AgentQuest::AgentId))
                    .col(string(AgentQuest::QuestId))
                    .col(integer(AgentQuest::Progress).default(0))
                    .col(string(AgentQuest::Status).default("in_progress"))
                    .col(
                        timestamp_with_time_zone(AgentQuest::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(AgentQuest::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_quest_agent_id")
                            .from(AgentQuest::Table, AgentQuest::AgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_quest_quest_id")
                            .from(AgentQuest::Table, AgentQuest::QuestId)
                            .to(Quest::Table, Quest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_agent_quest_unique")
                    .table(AgentQuest::Table)
                    .col(AgentQuest::AgentId)
                    .col(AgentQuest::QuestId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgentQuest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AgentQuest {
    #[sea_orm(iden = "agent_quests")]
    Table,
    Id,
    AgentId,
    QuestId,
    Progress,
    Status,
    StartedAt,
    CompletedAt,
}
