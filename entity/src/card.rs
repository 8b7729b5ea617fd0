use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub template_id: i32,
    pub rarity: String,
    pub mint_number: i32,
    pub owner_agent_id: Option<String>,
    pub strength_mod: i32,
    pub intelligence_mod: i32,
    pub charisma_mod: i32,
    pub wisdom_mod: i32,
    pub dexterity_mod: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::card_template::Entity",
        from = "Column::TemplateId",
        to = "super::card_template::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    CardTemplate,
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::OwnerAgentId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Agent,
}

impl Related<super::card_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardTemplate.def()
    }
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
