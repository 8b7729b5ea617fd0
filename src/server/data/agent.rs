//! Agent data repository.
//!
//! Provides the `AgentRepository` for creating agents on first sight, looking them up by
//! internal or Moltbook ID, tracking the daily login date and resolving display names.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::server::model::agent::Agent;

/// Repository providing database operations for agents.
pub struct AgentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AgentRepository<'a, C> {
    /// Creates a new AgentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an agent unless one with the same Moltbook ID already exists.
    ///
    /// Uses `ON CONFLICT (moltbook_id) DO NOTHING` so concurrent callers race safely; only
    /// the caller whose row was written sees `true`.
    ///
    /// # Arguments
    /// - `moltbook_id` - External agent identifier
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Ok(true)` - A new agent row was inserted
    /// - `Ok(false)` - The agent already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(&self, moltbook_id: &str, name: &str) -> Result<bool, DbErr> {
        let inserted = entity::prelude::Agent::insert(entity::agent::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            moltbook_id: ActiveValue::Set(moltbook_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
            karma: ActiveValue::Set(0),
            last_login_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::agent::Column::MoltbookId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Finds an agent by Moltbook ID.
    ///
    /// # Returns
    /// - `Ok(Some(Agent))` - Agent found
    /// - `Ok(None)` - No agent with that Moltbook ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_moltbook_id(&self, moltbook_id: &str) -> Result<Option<Agent>, DbErr> {
        let entity = entity::prelude::Agent::find()
            .filter(entity::agent::Column::MoltbookId.eq(moltbook_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Agent::from_entity))
    }

    /// Finds an agent by internal ID.
    pub async fn find_by_id(&self, agent_id: &str) -> Result<Option<Agent>, DbErr> {
        let entity = entity::prelude::Agent::find_by_id(agent_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Agent::from_entity))
    }

    /// Stores `today` as the agent's last login date if it is not already today.
    ///
    /// A single conditional update, so two simultaneous first requests of the day cannot
    /// both claim the login bonus.
    ///
    /// # Returns
    /// - `Ok(true)` - The date changed and the caller owns today's login bonus
    /// - `Ok(false)` - Already logged in today, or unknown agent
    /// - `Err(DbErr)` - Database error during update
    pub async fn claim_daily_login(&self, agent_id: &str, today: NaiveDate) -> Result<bool, DbErr> {
        let result = entity::prelude::Agent::update_many()
            .col_expr(entity::agent::Column::LastLoginDate, Expr::value(today))
            .filter(entity::agent::Column::Id.eq(agent_id))
            .filter(
                Condition::any()
                    .add(entity::agent::Column::LastLoginDate.is_null())
                    .add(entity::agent::Column::LastLoginDate.ne(today)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds `amount` to the agent's karma.
    pub async fn add_karma(&self, agent_id: &str, amount: i32) -> Result<(), DbErr> {
        entity::prelude::Agent::update_many()
            .col_expr(
                entity::agent::Column::Karma,
                Expr::col(entity::agent::Column::Karma).add(amount),
            )
            .filter(entity::agent::Column::Id.eq(agent_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resolves display names for a set of agent IDs.
    ///
    /// Unknown IDs are absent from the returned map.
    pub async fn names_by_ids(&self, agent_ids: &[String]) -> Result<HashMap<String, String>, DbErr> {
        if agent_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let agents = entity::prelude::Agent::find()
            .filter(entity::agent::Column::Id.is_in(agent_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(agents.into_iter().map(|a| (a.id, a.name)).collect())
    }

    /// Returns the internal ID of every agent.
    pub async fn get_all_ids(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Agent::find()
            .select_only()
            .column(entity::agent::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
