//! Pack data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::pack::{Pack, PackType},
};

pub struct PackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unopened pack owned by the agent.
    pub async fn create(&self, owner_agent_id: &str, pack_type: PackType) -> Result<Pack, AppError> {
        let entity = entity::pack::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            pack_type: ActiveValue::Set(pack_type.as_str().to_string()),
            owner_agent_id: ActiveValue::Set(owner_agent_id.to_string()),
            opened: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            opened_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Pack::from_entity(entity)
    }

    pub async fn find_by_id(&self, pack_id: &str) -> Result<Option<Pack>, AppError> {
        let entity = entity::prelude::Pack::find_by_id(pack_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Pack::from_entity).transpose()
    }

    /// Gets the agent's unopened packs, newest first.
    pub async fn get_unopened_by_owner(&self, agent_id: &str) -> Result<Vec<Pack>, AppError> {
        let entities = entity::prelude::Pack::find()
            .filter(entity::pack::Column::OwnerAgentId.eq(agent_id))
            .filter(entity::pack::Column::Opened.eq(false))
            .order_by_desc(entity::pack::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Pack::from_entity).collect()
    }

    /// Marks a pack opened if it is still unopened.
    ///
    /// # Returns
    /// - `Ok(true)` - This call opened the pack
    /// - `Ok(false)` - The pack was already opened
    pub async fn mark_opened(&self, pack_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Pack::update_many()
            .col_expr(entity::pack::Column::Opened, Expr::value(true))
            .col_expr(entity::pack::Column::OpenedAt, Expr::value(Utc::now()))
            .filter(entity::pack::Column::Id.eq(pack_id))
            .filter(entity::pack::Column::Opened.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
