//! Pack types, rarity weights and the card draw.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    model::pack::{OpenedPackDto, PackDto},
    server::{
        error::AppError,
        model::card::{Card, Rarity, StatModifiers},
    },
};

/// Number of cards drawn when a pack is opened.
pub const CARDS_PER_PACK: usize = 5;

string_enum! {
    pub enum PackType {
        Starter => "starter",
        Standard => "standard",
        Premium => "premium",
        Legendary => "legendary",
    }
}

impl PackType {
    /// Rarity weights walked in order by `pick_rarity`.
    pub fn rarity_weights(&self) -> &'static [(Rarity, u32)] {
        match self {
            PackType::Starter => &[(Rarity::Common, 80), (Rarity::Uncommon, 20)],
            PackType::Standard => &[
                (Rarity::Common, 60),
                (Rarity::Uncommon, 25),
                (Rarity::Rare, 15),
            ],
            PackType::Premium => &[
                (Rarity::Uncommon, 40),
                (Rarity::Rare, 40),
                (Rarity::Epic, 20),
            ],
            PackType::Legendary => &[
                (Rarity::Rare, 20),
                (Rarity::Epic, 40),
                (Rarity::Legendary, 30),
                (Rarity::Mythic, 10),
            ],
        }
    }
}

/// Picks the rarity whose cumulative weight range contains `roll`.
///
/// `roll` is expected in `[0, total_weight)`; anything past the end falls back to common.
pub fn pick_rarity(weights: &[(Rarity, u32)], roll: u32) -> Rarity {
    let mut remaining = roll;
    for (rarity, weight) in weights {
        if remaining < *weight {
            return *rarity;
        }
        remaining -= weight;
    }
    Rarity::Common
}

/// A card to be minted from a pack.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraw {
    pub template_id: i32,
    pub rarity: Rarity,
    pub mods: StatModifiers,
}

/// Draws `CARDS_PER_PACK` cards: random template, weighted rarity, modifiers in
/// `0..=rarity.max_mod()`.
///
/// Returns an empty list when `template_ids` is empty.
pub fn draw_cards<R: Rng + ?Sized>(
    rng: &mut R,
    pack_type: PackType,
    template_ids: &[i32],
) -> Vec<CardDraw> {
    if template_ids.is_empty() {
        return Vec::new();
    }

    let weights = pack_type.rarity_weights();
    let total: u32 = weights.iter().map(|(_, w)| w).sum();

    (0..CARDS_PER_PACK)
        .map(|_| {
            let template_id = template_ids[rng.random_range(0..template_ids.len())];
            let rarity = pick_rarity(weights, rng.random_range(0..total));
            let max = rarity.max_mod();
            let mods = StatModifiers {
                strength: rng.random_range(0..=max),
                intelligence: rng.random_range(0..=max),
                charisma: rng.random_range(0..=max),
                wisdom: rng.random_range(0..=max),
                dexterity: rng.random_range(0..=max),
            };
            CardDraw {
                template_id,
                rarity,
                mods,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pack {
    pub id: String,
    pub pack_type: PackType,
    pub owner_agent_id: String,
    pub opened: bool,
    pub created_at: DateTime<Utc>,
    pub opened_at: Option<DateTime<Utc>>,
}

impl Pack {
    pub fn from_entity(entity: entity::pack::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            pack_type: PackType::from_stored(&entity.pack_type)?,
            owner_agent_id: entity.owner_agent_id,
            opened: entity.opened,
            created_at: entity.created_at,
            opened_at: entity.opened_at,
        })
    }

    pub fn into_dto(self) -> PackDto {
        PackDto {
            id: self.id,
            pack_type: self.pack_type.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// A pack together with the cards minted when it was opened.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedPack {
    pub pack: Pack,
    pub cards: Vec<Card>,
}

impl OpenedPack {
    pub fn into_dto(self) -> OpenedPackDto {
        OpenedPackDto {
            pack_id: self.pack.id,
            pack_type: self.pack.pack_type.as_str().to_string(),
            cards: self.cards.into_iter().map(Card::into_dto).collect(),
        }
    }
}
