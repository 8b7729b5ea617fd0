//! Card factory for creating owned card instances.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating cards of an existing template.
///
/// # Example
///
/// ```rust,ignore
/// let card = CardFactory::new(&db, template.id)
///     .owner(Some(agent.id.clone()))
///     .rarity("legendary")
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    template_id: i32,
    owner_agent_id: Option<String>,
    rarity: String,
    mint_number: i32,
    mods: [i32; 5],
}

impl<'a> CardFactory<'a> {
    /// Defaults: no owner, rarity `"common"`, mint number `1`, zero modifiers.
    pub fn new(db: &'a DatabaseConnection, template_id: i32) -> Self {
        Self {
            db,
            template_id,
            owner_agent_id: None,
            rarity: "common".to_string(),
            mint_number: 1,
            mods: [0; 5],
        }
    }

    pub fn owner(mut self, owner_agent_id: Option<String>) -> Self {
        self.owner_agent_id = owner_agent_id;
        self
    }

    pub fn rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = rarity.into();
        self
    }

    pub fn mint_number(mut self, mint_number: i32) -> Self {
        self.mint_number = mint_number;
        self
    }

    /// Sets the strength, intelligence, charisma, wisdom and dexterity modifiers.
    pub fn mods(mut self, mods: [i32; 5]) -> Self {
        self.mods = mods;
        self
    }

    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let [strength, intelligence, charisma, wisdom, dexterity] = self.mods;
        entity::card::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            template_id: ActiveValue::Set(self.template_id),
            rarity: ActiveValue::Set(self.rarity),
            mint_number: ActiveValue::Set(self.mint_number),
            owner_agent_id: ActiveValue::Set(self.owner_agent_id),
            strength_mod: ActiveValue::Set(strength),
            intelligence_mod: ActiveValue::Set(intelligence),
            charisma_mod: ActiveValue::Set(charisma),
            wisdom_mod: ActiveValue::Set(wisdom),
            dexterity_mod: ActiveValue::Set(dexterity),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a common card of the template owned by the given agent.
pub async fn create_card(
    db: &DatabaseConnection,
    template_id: i32,
    owner_agent_id: &str,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, template_id)
        .owner(Some(owner_agent_id.to_string()))
        .build()
        .await
}
