use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "battles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub challenger_id: String,
    pub defender_id: String,
    pub challenger_card_id: String,
    pub defender_card_id: Option<String>,
    pub challenger_power: Option<i32>,
    pub defender_power: Option<i32>,
    pub winner_id: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::ChallengerId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Challenger,
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::DefenderId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Defender,
    #[sea_orm(
        belongs_to = "super::card::Entity",
        from = "Column::ChallengerCardId",
        to = "super::card::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ChallengerCard,
}

impl ActiveModelBehavior for ActiveModel {}
