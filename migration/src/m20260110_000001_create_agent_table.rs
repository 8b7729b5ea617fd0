use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agent::Table)
                    .if_not_exists()
                    .col(string(Agent::Id).primary_key())
                    .col(string_uniq(Agent::MoltbookId))
                    .col(string(Agent::Name))
                    .col(integer(Agent::Karma).default(0))
                    .col(date_null(Agent::LastLoginDate))
                    .col(
                        timestamp_with_time_zone(Agent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Agent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Agent {
    #[sea_orm(iden = "agents")]
    Table,
    Id,
    MoltbookId,
    Name,
    Karma,
    LastLoginDate,
    CreatedAt,
}
