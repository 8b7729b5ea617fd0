use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(CardTemplate::Id))
                    .col(string(CardTemplate::AgentName))
                    .col(string(CardTemplate::Class))
                    .col(string(CardTemplate::Element))
                    .col(integer(CardTemplate::Strength))
                    .col(integer(CardTemplate::Intelligence))
                    .col(integer(CardTemplate::Charisma))
                    .col(integer(CardTemplate::Wisdom))
                    .col(integer(CardTemplate::Dexterity))
                    .col(integer(CardTemplate::Karma))
                    .col(string_null(CardTemplate::SpecialAbility))
                    .col(text_null(CardTemplate::AbilityDescription))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CardTemplate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardTemplate {
    #[sea_orm(iden = "card_templates")]
    Table,
    Id,
    AgentName,
    Class,
    Element,
    Strength,
    Intelligence,
    Charisma,
    Wisdom,
    Dexterity,
    Karma,
    SpecialAbility,
    AbilityDescription,
}
