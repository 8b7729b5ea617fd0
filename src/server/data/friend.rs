//! Friendship data repository.
//!
//! A friendship row is directional (`agent_id` sent the request to `friend_id`) but
//! accepted friendships count for both sides, so most lookups match either direction.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::friend::{FriendStatus, Friendship},
};

pub struct FriendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn involves(agent_id: &str) -> Condition {
    Condition::any()
        .add(entity::friend::Column::AgentId.eq(agent_id))
        .add(entity::friend::Column::FriendId.eq(agent_id))
}

fn between(a: &str, b: &str) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(entity::friend::Column::AgentId.eq(a))
                .add(entity::friend::Column::FriendId.eq(b)),
        )
        .add(
            Condition::all()
                .add(entity::friend::Column::AgentId.eq(b))
                .add(entity::friend::Column::FriendId.eq(a)),
        )
}

impl<'a, C: ConnectionTrait> FriendRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending request from `agent_id` to `friend_id`.
    pub async fn create(&self, agent_id: &str, friend_id: &str) -> Result<Friendship, AppError> {
        let now = Utc::now();
        let entity = entity::friend::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            agent_id: ActiveValue::Set(agent_id.to_string()),
            friend_id: ActiveValue::Set(friend_id.to_string()),
            status: ActiveValue::Set(FriendStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Friendship::from_entity(entity)
    }

    /// Gets every relation between two agents, in either direction.
    pub async fn find_between(&self, a: &str, b: &str) -> Result<Vec<Friendship>, AppError> {
        let entities = entity::prelude::Friend::find()
            .filter(between(a, b))
            .all(self.db)
            .await?;

        entities.into_iter().map(Friendship::from_entity).collect()
    }

    /// Finds a pending request addressed to `agent_id`.
    pub async fn find_pending_for_recipient(
        &self,
        friendship_id: &str,
        agent_id: &str,
    ) -> Result<Option<Friendship>, AppError> {
        let entity = entity::prelude::Friend::find_by_id(friendship_id.to_string())
            .filter(entity::friend::Column::FriendId.eq(agent_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Pending.as_str()))
            .one(self.db)
            .await?;

        entity.map(Friendship::from_entity).transpose()
    }

    /// Resolves a pending request addressed to `agent_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Request moved to `status`
    /// - `Ok(false)` - No pending request with that ID for the agent
    pub async fn resolve(
        &self,
        friendship_id: &str,
        agent_id: &str,
        status: FriendStatus,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Friend::update_many()
            .col_expr(entity::friend::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::friend::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::friend::Column::Id.eq(friendship_id))
            .filter(entity::friend::Column::FriendId.eq(agent_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every relation between two agents and returns how many rows went.
    pub async fn delete_between(&self, a: &str, b: &str) -> Result<u64, AppError> {
        let result = entity::prelude::Friend::delete_many()
            .filter(between(a, b))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets accepted friendships on either side.
    pub async fn get_accepted_for_agent(&self, agent_id: &str) -> Result<Vec<Friendship>, AppError> {
        let entities = entity::prelude::Friend::find()
            .filter(involves(agent_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Accepted.as_str()))
            .all(self.db)
            .await?;

        entities.into_iter().map(Friendship::from_entity).collect()
    }

    pub async fn count_accepted_for_agent(&self, agent_id: &str) -> Result<u64, AppError> {
        let count = entity::prelude::Friend::find()
            .filter(involves(agent_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Accepted.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Pending requests sent to the agent, newest first.
    pub async fn get_incoming(&self, agent_id: &str) -> Result<Vec<Friendship>, AppError> {
        let entities = entity::prelude::Friend::find()
            .filter(entity::friend::Column::FriendId.eq(agent_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Pending.as_str()))
            .order_by_desc(entity::friend::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Friendship::from_entity).collect()
    }

    /// Pending requests sent by the agent, newest first.
    pub async fn get_outgoing(&self, agent_id: &str) -> Result<Vec<Friendship>, AppError> {
        let entities = entity::prelude::Friend::find()
            .filter(entity::friend::Column::AgentId.eq(agent_id))
            .filter(entity::friend::Column::Status.eq(FriendStatus::Pending.as_str()))
            .order_by_desc(entity::friend::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Friendship::from_entity).collect()
    }
}
