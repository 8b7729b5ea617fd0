//! Card domain models, rarities and the power formula.

use chrono::{DateTime, Utc};

use crate::{
    model::card::{CardDto, CardTemplateDto, CreateCardTemplateDto},
    server::error::AppError,
};

string_enum! {
    /// Card rarity, ordered from most to least common.
    pub enum Rarity {
        Common => "common",
        Uncommon => "uncommon",
        Rare => "rare",
        Epic => "epic",
        Legendary => "legendary",
        Mythic => "mythic",
    }
}

impl Rarity {
    /// Power multiplier in percent: 1.0, 1.1, 1.25, 1.5, 2.0 and 3.0.
    pub fn multiplier_percent(&self) -> i32 {
        match self {
            Rarity::Common => 100,
            Rarity::Uncommon => 110,
            Rarity::Rare => 125,
            Rarity::Epic => 150,
            Rarity::Legendary => 200,
            Rarity::Mythic => 300,
        }
    }

    /// Upper bound (inclusive) of the random modifier added to each of the first five stats.
    pub fn max_mod(&self) -> i32 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 2,
            Rarity::Rare => 4,
            Rarity::Epic => 6,
            Rarity::Legendary => 8,
            Rarity::Mythic => 10,
        }
    }
}

/// Highest value an admin may give any single template stat.
pub const MAX_TEMPLATE_STAT: i32 = 1000;

/// `floor(stat_total * multiplier(rarity))`, computed in integer percent.
///
/// Results outside the `i32` range saturate.
pub fn calculate_power(stat_total: i64, rarity: Rarity) -> i32 {
    let power = (stat_total * i64::from(rarity.multiplier_percent())).div_euclid(100);
    power.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Per-card modifiers applied on top of the template's base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatModifiers {
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub wisdom: i32,
    pub dexterity: i32,
}

/// A card instance joined with its template, carrying effective stats.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub template_id: i32,
    pub name: String,
    pub class: String,
    pub element: String,
    pub rarity: Rarity,
    pub mint_number: i32,
    pub owner_agent_id: Option<String>,
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub wisdom: i32,
    pub dexterity: i32,
    pub karma: i32,
    pub special_ability: Option<String>,
    pub ability_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Combines a card row with its template row.
    ///
    /// # Returns
    /// - `Ok(Card)` - Card with effective stats (template stat + modifier)
    /// - `Err(AppError::InternalError)` - Stored rarity is not a known value
    pub fn from_entity(
        card: entity::card::Model,
        template: entity::card_template::Model,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: card.id,
            template_id: card.template_id,
            name: template.agent_name,
            class: template.class,
            element: template.element,
            rarity: Rarity::from_stored(&card.rarity)?,
            mint_number: card.mint_number,
            owner_agent_id: card.owner_agent_id,
            strength: template.strength.saturating_add(card.strength_mod),
            intelligence: template.intelligence.saturating_add(card.intelligence_mod),
            charisma: template.charisma.saturating_add(card.charisma_mod),
            wisdom: template.wisdom.saturating_add(card.wisdom_mod),
            dexterity: template.dexterity.saturating_add(card.dexterity_mod),
            karma: template.karma,
            special_ability: template.special_ability,
            ability_description: template.ability_description,
            created_at: card.created_at,
        })
    }

    pub fn stat_total(&self) -> i64 {
        [
            self.strength,
            self.intelligence,
            self.charisma,
            self.wisdom,
            self.dexterity,
            self.karma,
        ]
        .iter()
        .map(|stat| i64::from(*stat))
        .sum()
    }

    pub fn total_power(&self) -> i32 {
        calculate_power(self.stat_total(), self.rarity)
    }

    pub fn into_dto(self) -> CardDto {
        let total_power = self.total_power();
        CardDto {
            id: self.id,
            template_id: self.template_id,
            name: self.name,
            class: self.class,
            element: self.element,
            rarity: self.rarity.as_str().to_string(),
            mint_number: self.mint_number,
            owner_agent_id: self.owner_agent_id,
            strength: self.strength,
            intelligence: self.intelligence,
            charisma: self.charisma,
            wisdom: self.wisdom,
            dexterity: self.dexterity,
            karma: self.karma,
            special_ability: self.special_ability,
            ability_description: self.ability_description,
            total_power,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardTemplate {
    pub id: i32,
    pub agent_name: String,
    pub class: String,
    pub element: String,
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub wisdom: i32,
    pub dexterity: i32,
    pub karma: i32,
    pub special_ability: Option<String>,
    pub ability_description: Option<String>,
}

impl CardTemplate {
    pub fn from_entity(entity: entity::card_template::Model) -> Self {
        Self {
            id: entity.id,
            agent_name: entity.agent_name,
            class: entity.class,
            element: entity.element,
            strength: entity.strength,
            intelligence: entity.intelligence,
            charisma: entity.charisma,
            wisdom: entity.wisdom,
            dexterity: entity.dexterity,
            karma: entity.karma,
            special_ability: entity.special_ability,
            ability_description: entity.ability_description,
        }
    }

    pub fn into_dto(self) -> CardTemplateDto {
        CardTemplateDto {
            id: self.id,
            agent_name: self.agent_name,
            class: self.class,
            element: self.element,
            strength: self.strength,
            intelligence: self.intelligence,
            charisma: self.charisma,
            wisdom: self.wisdom,
            dexterity: self.dexterity,
            karma: self.karma,
            special_ability: self.special_ability,
            ability_description: self.ability_description,
        }
    }
}

/// Parameters for inserting a card template.
#[derive(Debug, Clone)]
pub struct CreateCardTemplateParam {
    pub agent_name: String,
    pub class: String,
    pub element: String,
    pub strength: i32,
    pub intelligence: i32,
    pub charisma: i32,
    pub wisdom: i32,
    pub dexterity: i32,
    pub karma: i32,
    pub special_ability: Option<String>,
    pub ability_description: Option<String>,
}

impl CreateCardTemplateParam {
    pub fn from_dto(dto: CreateCardTemplateDto) -> Self {
        Self {
            agent_name: dto.agent_name,
            class: dto.class,
            element: dto.element,
            strength: dto.strength,
            intelligence: dto.intelligence,
            charisma: dto.charisma,
            wisdom: dto.wisdom,
            dexterity: dto.dexterity,
            karma: dto.karma,
            special_ability: dto.special_ability,
            ability_description: dto.ability_description,
        }
    }

    /// Validates a template submitted by an admin.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.agent_name.trim().is_empty() {
            return Err(AppError::bad_request("Template name is required"));
        }
        let stats = [
            self.strength,
            self.intelligence,
            self.charisma,
            self.wisdom,
            self.dexterity,
            self.karma,
        ];
        if stats.iter().any(|s| *s < 0) {
            return Err(AppError::bad_request("Template stats must not be negative"));
        }
        if stats.iter().any(|s| *s > MAX_TEMPLATE_STAT) {
            return Err(AppError::bad_request(format!(
                "Template stats must be at most {}",
                MAX_TEMPLATE_STAT
            )));
        }
        Ok(())
    }
}
