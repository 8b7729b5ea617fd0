//! Agent stats data repository.
//!
//! Stats are updated with relative column expressions (`elo = elo + ?`) so concurrent
//! battles and trades never overwrite each other's counters.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::agent::{AgentStats, StatsDelta, DEFAULT_ELO};

pub struct AgentStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgentStatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the default stats row for an agent if it is missing.
    ///
    /// # Returns
    /// - `Ok(true)` - Row was created
    /// - `Ok(false)` - Row already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn ensure(&self, agent_id: &str) -> Result<bool, DbErr> {
        let inserted = entity::prelude::AgentStats::insert(entity::agent_stats::ActiveModel {
            agent_id: ActiveValue::Set(agent_id.to_string()),
            elo: ActiveValue::Set(DEFAULT_ELO),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            draws: ActiveValue::Set(0),
            packs_opened: ActiveValue::Set(0),
            cards_collected: ActiveValue::Set(0),
            trades_completed: ActiveValue::Set(0),
            battles_since_last_pack: ActiveValue::Set(0),
            weekly_leaderboard_rank: ActiveValue::Set(None),
            last_weekly_reward: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::agent_stats::Column::AgentId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    pub async fn find_by_agent_id(&self, agent_id: &str) -> Result<Option<AgentStats>, DbErr> {
        let entity = entity::prelude::AgentStats::find_by_id(agent_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(AgentStats::from_entity))
    }

    /// Adds every non-zero field of `delta` to the agent's stats in one update.
    pub async fn apply(&self, agent_id: &str, delta: StatsDelta) -> Result<(), DbErr> {
        use entity::agent_stats::Column;

        let changes = [
            (Column::Elo, delta.elo),
            (Column::Wins, delta.wins),
            (Column::Losses, delta.losses),
            (Column::Draws, delta.draws),
            (Column::PacksOpened, delta.packs_opened),
            (Column::CardsCollected, delta.cards_collected),
            (Column::TradesCompleted, delta.trades_completed),
            (Column::BattlesSinceLastPack, delta.battles_since_last_pack),
        ];

        let mut update = entity::prelude::AgentStats::update_many()
            .filter(Column::AgentId.eq(agent_id));
        let mut changed = false;
        for (column, amount) in changes {
            if amount != 0 {
                update = update.col_expr(column, Expr::col(column).add(amount));
                changed = true;
            }
        }

        if changed {
            update.exec(self.db).await?;
        }

        Ok(())
    }

    pub async fn reset_battles_since_last_pack(&self, agent_id: &str) -> Result<(), DbErr> {
        entity::prelude::AgentStats::update_many()
            .col_expr(
                entity::agent_stats::Column::BattlesSinceLastPack,
                Expr::value(0),
            )
            .filter(entity::agent_stats::Column::AgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records a weekly leaderboard reward.
    ///
    /// # Arguments
    /// - `agent_id` - Rewarded agent
    /// - `rank` - 1-based leaderboard position
    /// - `week_key` - ISO week key (`iso_year * 100 + iso_week`) the reward is for
    pub async fn record_weekly_reward(
        &self,
        agent_id: &str,
        rank: u32,
        week_key: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::AgentStats::update_many()
            .col_expr(
                entity::agent_stats::Column::WeeklyLeaderboardRank,
                Expr::value(rank as i32),
            )
            .col_expr(
                entity::agent_stats::Column::LastWeeklyReward,
                Expr::value(week_key),
            )
            .filter(entity::agent_stats::Column::AgentId.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
