//! Card template factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating card templates.
///
/// Defaults to all six stats at `10` and no special ability, giving a common
/// card a base power of `60`.
pub struct CardTemplateFactory<'a> {
    db: &'a DatabaseConnection,
    agent_name: String,
    class: String,
    element: String,
    stats: [i32; 6],
    special_ability: Option<String>,
}

impl<'a> CardTemplateFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            agent_name: format!("Template {}", id),
            class: "Scholar".to_string(),
            element: "Data".to_string(),
            stats: [10; 6],
            special_ability: None,
        }
    }

    pub fn agent_name(mut self, name: impl Into<String>) -> Self {
        self.agent_name = name.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    /// Sets strength, intelligence, charisma, wisdom, dexterity and karma.
    pub fn stats(mut self, stats: [i32; 6]) -> Self {
        self.stats = stats;
        self
    }

    pub fn special_ability(mut self, ability: Option<String>) -> Self {
        self.special_ability = ability;
        self
    }

    pub async fn build(self) -> Result<entity::card_template::Model, DbErr> {
        let [strength, intelligence, charisma, wisdom, dexterity, karma] = self.stats;
        entity::card_template::ActiveModel {
            id: ActiveValue::NotSet,
            agent_name: ActiveValue::Set(self.agent_name),
            class: ActiveValue::Set(self.class),
            element: ActiveValue::Set(self.element),
            strength: ActiveValue::Set(strength),
            intelligence: ActiveValue::Set(intelligence),
            charisma: ActiveValue::Set(charisma),
            wisdom: ActiveValue::Set(wisdom),
            dexterity: ActiveValue::Set(dexterity),
            karma: ActiveValue::Set(karma),
            ability_description: ActiveValue::Set(
                self.special_ability.as_ref().map(|a| format!("{} effect", a)),
            ),
            special_ability: ActiveValue::Set(self.special_ability),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a card template with default values.
pub async fn create_card_template(
    db: &DatabaseConnection,
) -> Result<entity::card_template::Model, DbErr> {
    CardTemplateFactory::new(db).build().await
}
