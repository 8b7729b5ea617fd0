//! Agent factory for creating test agents together with their stats row.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test agents with customizable fields.
///
/// Every built agent also gets an `agent_stats` row, mirroring what signup does.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::agent::AgentFactory;
///
/// let agent = AgentFactory::new(&db)
///     .moltbook_id("mb_123")
///     .name("Custom")
///     .elo(1300)
///     .build()
///     .await?;
/// ```
pub struct AgentFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    moltbook_id: String,
    name: String,
    karma: i32,
    last_login_date: Option<NaiveDate>,
    elo: i32,
    wins: i32,
    losses: i32,
    trades_completed: i32,
    cards_collected: i32,
    battles_since_last_pack: i32,
}

impl<'a> AgentFactory<'a> {
    /// Creates a new AgentFactory with default values.
    ///
    /// Defaults:
    /// - moltbook_id: `"mb_{id}"` where id is auto-incremented
    /// - name: `"Agent {id}"`
    /// - karma: `0`, last_login_date: `None`
    /// - stats: elo `1000`, all counters `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: new_uuid(),
            moltbook_id: format!("mb_{}", id),
            name: format!("Agent {}", id),
            karma: 0,
            last_login_date: None,
            elo: 1000,
            wins: 0,
            losses: 0,
            trades_completed: 0,
            cards_collected: 0,
            battles_since_last_pack: 0,
        }
    }

    pub fn moltbook_id(mut self, moltbook_id: impl Into<String>) -> Self {
        self.moltbook_id = moltbook_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn karma(mut self, karma: i32) -> Self {
        self.karma = karma;
        self
    }

    pub fn last_login_date(mut self, date: Option<NaiveDate>) -> Self {
        self.last_login_date = date;
        self
    }

    pub fn elo(mut self, elo: i32) -> Self {
        self.elo = elo;
        self
    }

    pub fn wins(mut self, wins: i32) -> Self {
        self.wins = wins;
        self
    }

    pub fn losses(mut self, losses: i32) -> Self {
        self.losses = losses;
        self
    }

    pub fn trades_completed(mut self, trades_completed: i32) -> Self {
        self.trades_completed = trades_completed;
        self
    }

    /// Sets the stats counter only; no cards are created.
    pub fn cards_collected(mut self, cards_collected: i32) -> Self {
        self.cards_collected = cards_collected;
        self
    }

    pub fn battles_since_last_pack(mut self, count: i32) -> Self {
        self.battles_since_last_pack = count;
        self
    }

    /// Builds and inserts the agent and its stats row.
    ///
    /// # Returns
    /// - `Ok(entity::agent::Model)` - Created agent
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::agent::Model, DbErr> {
        let agent = entity::agent::ActiveModel {
            id: ActiveValue::Set(self.id),
            moltbook_id: ActiveValue::Set(self.moltbook_id),
            name: ActiveValue::Set(self.name),
            karma: ActiveValue::Set(self.karma),
            last_login_date: ActiveValue::Set(self.last_login_date),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        entity::agent_stats::ActiveModel {
            agent_id: ActiveValue::Set(agent.id.clone()),
            elo: ActiveValue::Set(self.elo),
            wins: ActiveValue::Set(self.wins),
            losses: ActiveValue::Set(self.losses),
            draws: ActiveValue::Set(0),
            packs_opened: ActiveValue::Set(0),
            cards_collected: ActiveValue::Set(self.cards_collected),
            trades_completed: ActiveValue::Set(self.trades_completed),
            battles_since_last_pack: ActiveValue::Set(self.battles_since_last_pack),
            weekly_leaderboard_rank: ActiveValue::Set(None),
            last_weekly_reward: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(agent)
    }
}

/// Creates an agent with default values.
///
/// Shorthand for `AgentFactory::new(db).build().await`.
pub async fn create_agent(db: &DatabaseConnection) -> Result<entity::agent::Model, DbErr> {
    AgentFactory::new(db).build().await
}

/// Creates an agent with the given ELO rating.
pub async fn create_agent_with_elo(
    db: &DatabaseConnection,
    elo: i32,
) -> Result<entity::agent::Model, DbErr> {
    AgentFactory::new(db).elo(elo).build().await
}
