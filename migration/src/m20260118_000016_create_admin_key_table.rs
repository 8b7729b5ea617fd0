use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminKey::Table)
                    .if_not_exists()
                    .col(string(AdminKey::Id).primary_key())
                    .col(string_uniq(AdminKey::KeyHash))
                    .col(string_null(AdminKey::Label))
                    .col(
                        timestamp_with_time_zone(AdminKey::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(AdminKey::LastUsedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminKey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminKey {
    #[sea_orm(iden = "admin_keys")]
    Table,
    Id,
    KeyHash,
    Label,
    CreatedAt,
    LastUsedAt,
}
