use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A card with its template data, effective stats and power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardDto {
    pub id: String,
    pub template_id: i32,
    pub name: String,
    pub class: String,
    pub element: String,
    pub rarity: String,
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
    pub total_power: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CollectionDto {
    pub cards: Vec<CardDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardResponseDto {
    pub card: CardDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardTemplateDto {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCardTemplateDto {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardTemplatesDto {
    pub templates: Vec<CardTemplateDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardTemplateResponseDto {
    pub template: CardTemplateDto,
}
