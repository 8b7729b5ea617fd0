use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "achievements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub category: String,
    pub requirement_kind: String,
    pub requirement_target: i32,
    pub reward_kind: String,
    pub reward_pack_type: Option<String>,
    pub reward_amount: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::agent_achievement::Entity")]
    AgentAchievement,
}

impl Related<super::agent_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgentAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
