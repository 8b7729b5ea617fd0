use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::card::CardDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDeckDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDeckDto {
    pub card_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeckDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub card_ids: Vec<String>,
    pub card_count: usize,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeckCreatedDto {
    pub deck_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeckUpdatedDto {
    pub deck_id: String,
    pub card_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DecksDto {
    pub decks: Vec<DeckDto>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeckDetailDto {
    pub deck: DeckDto,
    pub cards: Vec<CardDto>,
}
