use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::api::DailyLoginDto,
    server::{
        error::{auth::AuthError, AppError},
        model::agent::Agent,
        service::{admin::AdminService, agent::AgentService},
    },
};

pub const AGENT_ID_HEADER: &str = "x-agent-id";
pub const AGENT_NAME_HEADER: &str = "x-agent-name";

/// The calling agent plus the daily login bonus granted by this request, if any.
pub struct AuthenticatedAgent {
    pub agent: Agent,
    pub daily_login: Option<DailyLoginDto>,
}

/// Resolves the calling agent from the `X-Agent-Id` and `X-Agent-Name` headers.
pub struct AgentGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AgentGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Registers the agent on first sight and runs the daily login check.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedAgent)` - Resolved agent
    /// - `Err(AppError::AuthErr(MissingAgentIdentity))` - Header absent or blank
    pub async fn require(&self) -> Result<AuthenticatedAgent, AppError> {
        let Some(moltbook_id) = header_value(self.headers, AGENT_ID_HEADER) else {
            return Err(AuthError::MissingAgentIdentity.into());
        };
        let name = header_value(self.headers, AGENT_NAME_HEADER).unwrap_or(moltbook_id);

        let agent_service = AgentService::new(self.db);
        let agent = agent_service.get_or_create(moltbook_id, name).await?;
        let daily_login = agent_service.check_daily_login(&agent.id).await?;

        Ok(AuthenticatedAgent {
            agent,
            daily_login: daily_login.into_dto(),
        })
    }
}

/// Checks the `Authorization: Bearer <key>` header against the stored admin keys.
pub struct AdminGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AdminGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    pub async fn require(&self) -> Result<(), AppError> {
        let Some(key) = header_value(self.headers, AUTHORIZATION.as_str())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|key| !key.is_empty())
        else {
            return Err(AuthError::MissingAdminKey.into());
        };

        if !AdminService::new(self.db).verify_key(key).await? {
            return Err(AuthError::InvalidAdminKey.into());
        }

        Ok(())
    }
}

fn header_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
