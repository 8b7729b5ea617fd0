use sea_orm::ConnectionTrait;

use crate::server::{
    data::{agent::AgentRepository, pack::PackRepository},
    error::AppError,
    model::reward::Reward,
};

/// Pays out an achievement or quest reward.
///
/// Generic over the connection so it can join the caller's transaction.
pub async fn grant_reward<C: ConnectionTrait>(
    db: &C,
    agent_id: &str,
    reward: Reward,
) -> Result<(), AppError> {
    match reward {
        Reward::Pack(pack_type) => {
            PackRepository::new(db).create(agent_id, pack_type).await?;
        }
        Reward::Karma(amount) => {
            AgentRepository::new(db).add_karma(agent_id, amount).await?;
        }
    }

    Ok(())
}
