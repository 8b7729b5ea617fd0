//! Admin API key repository. Only SHA-256 hashes of keys are stored.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

pub struct AdminKeyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdminKeyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, key_hash: &str, label: Option<String>) -> Result<(), DbErr> {
        entity::admin_key::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            key_hash: ActiveValue::Set(key_hash.to_string()),
            label: ActiveValue::Set(label),
            created_at: ActiveValue::Set(Utc::now()),
            last_used_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Stamps `last_used_at` on the key with this hash.
    ///
    /// # Returns
    /// - `Ok(true)` - A key with this hash exists
    /// - `Ok(false)` - Unknown key
    pub async fn touch(&self, key_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AdminKey::update_many()
            .col_expr(entity::admin_key::Column::LastUsedAt, Expr::value(Utc::now()))
            .filter(entity::admin_key::Column::KeyHash.eq(key_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
