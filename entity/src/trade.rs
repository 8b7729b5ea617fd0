use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "trades")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub from_agent_id: String,
    pub to_agent_id: String,
    /// JSON array of card IDs offered by `from_agent_id`.
    pub offered_card_ids: Json,
    /// JSON array of card IDs requested from `to_agent_id`.
    pub wanted_card_ids: Json,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub resolved_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::FromAgentId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    FromAgent,
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::ToAgentId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToAgent,
}

impl ActiveModelBehavior for ActiveModel {}
