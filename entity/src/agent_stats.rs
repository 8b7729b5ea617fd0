use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "agent_stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub agent_id: String,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub packs_opened: i32,
    pub cards_collected: i32,
    pub trades_completed: i32,
    pub battles_since_last_pack: i32,
    pub weekly_leaderboard_rank: Option<i32>,
    /// ISO week key (`year * 100 + week`) of the last weekly reward.
    pub last_weekly_reward: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Agent,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
