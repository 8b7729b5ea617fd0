use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_agent_table::Agent,
    m20260110_000003_create_card_template_table::CardTemplate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(string(Card::Id).primary_key())
                    .col(integer(Card::TemplateId))
                    .col(string(Card::Rarity))
                    .col(integer(Card::MintNumber))
                    .col(string_null(Card::OwnerAgentId))
                    .col(integer(Card::StrengthMod).default(0))
                    .col(integer(Card::IntelligenceMod).default(0))
                    .col(integer(Card::CharismaMod).default(0))
                    .col(integer(Card::WisdomMod).default(0))
                    .col(integer(Card::DexterityMod).default(0))
                    .col(
                        timestamp_with_time_zone(Card::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_template_id")
                            .from(Card::Table, Card::TemplateId)
                            .to(CardTemplate::Table, CardTemplate::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_owner_agent_id")
                            .from(Card::Table, Card::OwnerAgentId)
                            .to(Agent::Table, Agent::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_card_owner_agent_id")
                    .table(Card::Table)
                    .col(Card::OwnerAgentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    #[sea_orm(iden = "cards")]
    Table,
    Id,
    TemplateId,
    Rarity,
    MintNumber,
    OwnerAgentId,
    StrengthMod,
    IntelligenceMod,
    CharismaMod,
    WisdomMod,
    DexterityMod,
    CreatedAt,
}
