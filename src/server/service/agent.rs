use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{agent::AgentRepository, agent_stats::AgentStatsRepository, pack::PackRepository},
    error::AppError,
    model::{
        agent::{Agent, DailyLogin, SIGNUP_STARTER_PACKS},
        pack::PackType,
    },
};

pub struct AgentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AgentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves an agent by Moltbook ID, registering it on first sight.
    ///
    /// A new agent gets a stats row and the signup starter packs. Concurrent first calls
    /// race on the unique Moltbook ID; only the call whose insert lands grants the bonus.
    /// An existing agent missing its stats row gets one recreated.
    ///
    /// # Returns
    /// - `Ok(Agent)` - Existing or newly created agent
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_or_create(&self, moltbook_id: &str, name: &str) -> Result<Agent, AppError> {
        let txn = self.db.begin().await?;

        let agent_repo = AgentRepository::new(&txn);
        let created = agent_repo.insert_if_absent(moltbook_id, name).await?;
        let agent = agent_repo
            .find_by_moltbook_id(moltbook_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Agent {} missing after insert", moltbook_id))
            })?;

        AgentStatsRepository::new(&txn).ensure(&agent.id).await?;

        if created {
            let pack_repo = PackRepository::new(&txn);
            for _ in 0..SIGNUP_STARTER_PACKS {
                pack_repo.create(&agent.id, PackType::Starter).await?;
            }
        }

        txn.commit().await?;

        if created {
            tracing::info!(
                "Registered agent {} ({}) with {} starter packs",
                agent.moltbook_id,
                agent.id,
                SIGNUP_STARTER_PACKS
            );
        }

        Ok(agent)
    }

    pub async fn ensure_exists(&self, moltbook_id: &str, name: &str) -> Result<(), AppError> {
        self.get_or_create(moltbook_id, name).await?;

        Ok(())
    }

    /// Grants the once-per-UTC-day standard pack.
    pub async fn check_daily_login(&self, agent_id: &str) -> Result<DailyLogin, AppError> {
        self.check_daily_login_on(agent_id, Utc::now().date_naive())
            .await
    }

    /// Grants the daily pack if the agent has not logged in on `today` yet.
    ///
    /// # Returns
    /// - `Ok(DailyLogin { pack_given: true, is_new_day: true })` - First login of the day
    /// - `Ok(DailyLogin::default())` - Already claimed today, or unknown agent
    pub async fn check_daily_login_on(
        &self,
        agent_id: &str,
        today: NaiveDate,
    ) -> Result<DailyLogin, AppError> {
        let txn = self.db.begin().await?;

        let claimed = AgentRepository::new(&txn)
            .claim_daily_login(agent_id, today)
            .await?;
        if claimed {
            PackRepository::new(&txn)
                .create(agent_id, PackType::Standard)
                .await?;
        }

        txn.commit().await?;

        if claimed {
            tracing::debug!("Daily login pack granted to {}", agent_id);
        }

        Ok(DailyLogin {
            pack_given: claimed,
            is_new_day: claimed,
        })
    }
}
