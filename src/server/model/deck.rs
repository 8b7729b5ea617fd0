use chrono::{DateTime, Utc};

use crate::{
    model::deck::{DeckDetailDto, DeckDto},
    server::{
        error::AppError,
        model::{card::Card, trade::card_ids_from_json},
    },
};

pub const MAX_DECKS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: String,
    pub agent_id: String,
    pub name: String,
    pub description: String,
    pub card_ids: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deck {
    pub fn from_entity(entity: entity::deck::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            agent_id: entity.agent_id,
            name: entity.name,
            description: entity.description,
            card_ids: card_ids_from_json(entity.card_ids)?,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DeckDto {
        DeckDto {
            card_count: self.card_ids.len(),
            id: self.id,
            name: self.name,
            description: self.description,
            card_ids: self.card_ids,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A deck with the cards it lists that still exist.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckDetail {
    pub deck: Deck,
    pub cards: Vec<Card>,
}

impl DeckDetail {
    pub fn into_dto(self) -> DeckDetailDto {
        DeckDetailDto {
            deck: self.deck.into_dto(),
            cards: self.cards.into_iter().map(Card::into_dto).collect(),
        }
    }
}
