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
                    .table(Friend::Table)
                    .if_not_exists()
                    .col(string(Friend::Id).primary_key())
                    .col(string(Friend::AgentId))
                    .col(string(Friend::FriendId))
                    .col(string(Friend::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Friend::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Friend::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_agent_id")
                            .from(Friend::Table, Friend::AgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_friend_id")
                            .from(Friend::Table, Friend::FriendId)
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
                    .name("idx_friend_pair")
                    .table(Friend::Table)
                    .col(Friend::AgentId)
                    .col(Friend::FriendId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friend::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friend {
    #[sea_orm(iden = "friends")]
    Table,
    Id,
    AgentId,
    FriendId,
    Status,
    CreatedAt,
    UpdatedAt,
}
