//! Friendship factory.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a friendship row from `agent_id` to `friend_id` with the given status.
///
/// # Arguments
/// - `status` - `"pending"`, `"accepted"` or `"declined"`
pub async fn create_friendship(
    db: &DatabaseConnection,
    agent_id: &str,
    friend_id: &str,
    status: &str,
) -> Result<entity::friend::Model, DbErr> {
    let now = Utc::now();
    entity::friend::ActiveModel {
        id: ActiveValue::Set(new_uuid()),
        agent_id: ActiveValue::Set(agent_id.to_string()),
        friend_id: ActiveValue::Set(friend_id.to_string()),
        status: ActiveValue::Set(status.to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
