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
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(string(Notification::Id).primary_key())
                    .col(string(Notification::RecipientAgentId))
                    .col(string(Notification::NotificationType))
                    .col(string(Notification::Title))
                    .col(text(Notification::Message))
                    .col(json_null(Notification::Data))
                    .col(boolean(Notification::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_recipient_agent_id")
                            .from(Notification::Table, Notification::RecipientAgentId)
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
                    .name("idx_notification_recipient_agent_id")
                    .table(Notification::Table)
                    .col(Notification::RecipientAgentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Notification {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    RecipientAgentId,
    NotificationType,
    Title,
    Message,
    Data,
    IsRead,
    CreatedAt,
}
