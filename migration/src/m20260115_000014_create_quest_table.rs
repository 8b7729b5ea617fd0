use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Quest::Table)
                    .if_not_exists()
                    .col(string(Quest::Id).primary_key())
                    .col(string_uniq(Quest::Name))
                    .col(text(Quest::Description))
                    .col(string(Quest::QuestType))
                    .col(string(Quest::Goal))
                    .col(integer(Quest::Target))
                    .col(string(Quest::RewardKind))
                    .col(string_null(Quest::RewardPackType))
                    .col(integer_null(Quest::RewardAmount))
                    .col(
                        timestamp_with_time_zone(Quest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Quest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Quest {
    #[sea_orm(iden = "quests")]
    Table,
    Id,
    Name,
    Description,
    QuestType,
    Goal,
    Target,
    RewardKind,
    RewardPackType,
    RewardAmount,
    CreatedAt,
}
