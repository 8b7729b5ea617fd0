//! Battle data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::battle::{Battle, BattleStatus, CompleteBattleParam},
};

pub struct BattleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BattleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending battle.
    pub async fn create(
        &self,
        challenger_id: &str,
        defender_id: &str,
        challenger_card_id: &str,
    ) -> Result<Battle, AppError> {
        let entity = entity::battle::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            challenger_id: ActiveValue::Set(challenger_id.to_string()),
            defender_id: ActiveValue::Set(defender_id.to_string()),
            challenger_card_id: ActiveValue::Set(challenger_card_id.to_string()),
            defender_card_id: ActiveValue::Set(None),
            challenger_power: ActiveValue::Set(None),
            defender_power: ActiveValue::Set(None),
            winner_id: ActiveValue::Set(None),
            status: ActiveValue::Set(BattleStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Battle::from_entity(entity)
    }

    /// Finds a pending battle in which `defender_id` is the defender.
    pub async fn find_pending_for_defender(
        &self,
        battle_id: &str,
        defender_id: &str,
    ) -> Result<Option<Battle>, AppError> {
        let entity = entity::prelude::Battle::find_by_id(battle_id.to_string())
            .filter(entity::battle::Column::DefenderId.eq(defender_id))
            .filter(entity::battle::Column::Status.eq(BattleStatus::Pending.as_str()))
            .one(self.db)
            .await?;

        entity.map(Battle::from_entity).transpose()
    }

    /// Records the result of a pending battle.
    ///
    /// # Returns
    /// - `Ok(true)` - Battle moved from pending to completed
    /// - `Ok(false)` - Battle was no longer pending
    pub async fn complete(
        &self,
        battle_id: &str,
        param: CompleteBattleParam,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Battle::update_many()
            .col_expr(
                entity::battle::Column::DefenderCardId,
                Expr::value(param.defender_card_id),
            )
            .col_expr(
                entity::battle::Column::ChallengerPower,
                Expr::value(param.challenger_power),
            )
            .col_expr(
                entity::battle::Column::DefenderPower,
                Expr::value(param.defender_power),
            )
            .col_expr(entity::battle::Column::WinnerId, Expr::value(param.winner_id))
            .col_expr(
                entity::battle::Column::Status,
                Expr::value(BattleStatus::Completed.as_str()),
            )
            .col_expr(entity::battle::Column::CompletedAt, Expr::value(Utc::now()))
            .filter(entity::battle::Column::Id.eq(battle_id))
            .filter(entity::battle::Column::Status.eq(BattleStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Declines a pending battle addressed to `defender_id`.
    pub async fn decline(&self, battle_id: &str, defender_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Battle::update_many()
            .col_expr(
                entity::battle::Column::Status,
                Expr::value(BattleStatus::Declined.as_str()),
            )
            .filter(entity::battle::Column::Id.eq(battle_id))
            .filter(entity::battle::Column::DefenderId.eq(defender_id))
            .filter(entity::battle::Column::Status.eq(BattleStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets completed battles the agent took part in, newest first.
    pub async fn get_completed_for_agent(
        &self,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<Battle>, AppError> {
        let entities = entity::prelude::Battle::find()
            .filter(
                Condition::any()
                    .add(entity::battle::Column::ChallengerId.eq(agent_id))
                    .add(entity::battle::Column::DefenderId.eq(agent_id)),
            )
            .filter(entity::battle::Column::Status.eq(BattleStatus::Completed.as_str()))
            .order_by_desc(entity::battle::Column::CompletedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Battle::from_entity).collect()
    }
}
