//! Pack factory.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PackFactory<'a> {
    db: &'a DatabaseConnection,
    owner_agent_id: String,
    pack_type: String,
    opened: bool,
}

impl<'a> PackFactory<'a> {
    /// Defaults: unopened `"standard"` pack.
    pub fn new(db: &'a DatabaseConnection, owner_agent_id: impl Into<String>) -> Self {
        Self {
            db,
            owner_agent_id: owner_agent_id.into(),
            pack_type: "standard".to_string(),
            opened: false,
        }
    }

    pub fn pack_type(mut self, pack_type: impl Into<String>) -> Self {
        self.pack_type = pack_type.into();
        self
    }

    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub async fn build(self) -> Result<entity::pack::Model, DbErr> {
        let now = Utc::now();
        entity::pack::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            pack_type: ActiveValue::Set(self.pack_type),
            owner_agent_id: ActiveValue::Set(self.owner_agent_id),
            opened: ActiveValue::Set(self.opened),
            created_at: ActiveValue::Set(now),
            opened_at: ActiveValue::Set(self.opened.then_some(now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unopened pack of the given type.
pub async fn create_pack(
    db: &DatabaseConnection,
    owner_agent_id: &str,
    pack_type: &str,
) -> Result<entity::pack::Model, DbErr> {
    PackFactory::new(db, owner_agent_id)
        .pack_type(pack_type)
        .build()
        .await
}
