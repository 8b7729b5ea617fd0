//! Battle factory.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BattleFactory<'a> {
    db: &'a DatabaseConnection,
    challenger_id: String,
    defender_id: String,
    challenger_card_id: String,
    status: String,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> BattleFactory<'a> {
    /// Defaults to a `"pending"` battle.
    pub fn new(
        db: &'a DatabaseConnection,
        challenger_id: impl Into<String>,
        defender_id: impl Into<String>,
        challenger_card_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            challenger_id: challenger_id.into(),
            defender_id: defender_id.into(),
            challenger_card_id: challenger_card_id.into(),
            status: "pending".to_string(),
            completed_at: None,
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Completed battles without an explicit time are stamped with the insert time.
    pub fn completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    pub async fn build(self) -> Result<entity::battle::Model, DbErr> {
        let completed_at = self
            .completed_at
            .or_else(|| (self.status == "completed").then(Utc::now));
        entity::battle::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            challenger_id: ActiveValue::Set(self.challenger_id),
            defender_id: ActiveValue::Set(self.defender_id),
            challenger_card_id: ActiveValue::Set(self.challenger_card_id),
            defender_card_id: ActiveValue::Set(None),
            challenger_power: ActiveValue::Set(None),
            defender_power: ActiveValue::Set(None),
            winner_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(completed_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending battle.
pub async fn create_battle(
    db: &DatabaseConnection,
    challenger_id: &str,
    defender_id: &str,
    challenger_card_id: &str,
) -> Result<entity::battle::Model, DbErr> {
    BattleFactory::new(db, challenger_id, defender_id, challenger_card_id)
        .build()
        .await
}
