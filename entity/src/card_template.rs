use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "card_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub agent_name: String,
    pub class: String,
    pub element: String,
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub wisdom: i32,
    pub dexterity: i32,
    pub karma: i32,
    pub special_ability: Option<String>,
    pub ability_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::card::Entity")]
    Card,
}

impl Related<super::card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Card.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
