use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(string(Achievement::Id).primary_key())
                    .col(string_uniq(Achievement::Name))
                    .col(text(Achievement::Description))
                    .col(string(Achievement::Category))
                    .col(string(Achievement::RequirementKind))
                    .col(integer(Achievement::RequirementTarget))
                    .col(string(Achievement::RewardKind))
                    .col(string_null(Achievement::RewardPackType))
                    .col(integer_null(Achievement::RewardAmount))
                    .col(
                        timestamp_with_time_zone(Achievement::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Achievement {
    #[sea_orm(iden = "achievements")]
    Table,
    Id,
    Name,
    Description,
    Category,
    RequirementKind,
    RequirementTarget,
    RewardKind,
    RewardPackType,
    RewardAmount,
    CreatedAt,
}
