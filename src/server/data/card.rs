//! Card data repository.
//!
//! Cards are always returned joined with their template so callers get effective stats
//! and power without a second lookup.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{card::Card, pack::CardDraw},
};

pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Mints a drawn card for `owner_agent_id`.
    ///
    /// The mint number is the number of existing cards of the same template plus one.
    ///
    /// # Returns
    /// - `Ok(Card)` - Newly minted card joined with its template
    /// - `Err(AppError::InternalError)` - Template referenced by the draw does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn mint(&self, owner_agent_id: &str, draw: &CardDraw) -> Result<Card, AppError> {
        let template = entity::prelude::CardTemplate::find_by_id(draw.template_id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Card template {} not found", draw.template_id))
            })?;

        let minted = entity::prelude::Card::find()
            .filter(entity::card::Column::TemplateId.eq(draw.template_id))
            .count(self.db)
            .await?;

        let card = entity::card::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            template_id: ActiveValue::Set(draw.template_id),
            rarity: ActiveValue::Set(draw.rarity.as_str().to_string()),
            mint_number: ActiveValue::Set(minted as i32 + 1),
            owner_agent_id: ActiveValue::Set(Some(owner_agent_id.to_string())),
            strength_mod: ActiveValue::Set(draw.mods.strength),
            intelligence_mod: ActiveValue::Set(draw.mods.intelligence),
            charisma_mod: ActiveValue::Set(draw.mods.charisma),
            wisdom_mod: ActiveValue::Set(draw.mods.wisdom),
            dexterity_mod: ActiveValue::Set(draw.mods.dexterity),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Card::from_entity(card, template)
    }

    /// Finds a card by ID regardless of owner.
    pub async fn find_by_id(&self, card_id: &str) -> Result<Option<Card>, AppError> {
        let result = entity::prelude::Card::find_by_id(card_id.to_string())
            .find_also_related(entity::prelude::CardTemplate)
            .one(self.db)
            .await?;

        result.map(join_template).transpose()
    }

    /// Finds a card by ID only if `agent_id` currently owns it.
    pub async fn find_owned(&self, card_id: &str, agent_id: &str) -> Result<Option<Card>, AppError> {
        let result = entity::prelude::Card::find_by_id(card_id.to_string())
            .find_also_related(entity::prelude::CardTemplate)
            .filter(entity::card::Column::OwnerAgentId.eq(agent_id))
            .one(self.db)
            .await?;

        result.map(join_template).transpose()
    }

    /// Gets an agent's collection ordered by template name, then mint number.
    pub async fn get_by_owner(&self, agent_id: &str) -> Result<Vec<Card>, AppError> {
        let results = entity::prelude::Card::find()
            .find_also_related(entity::prelude::CardTemplate)
            .filter(entity::card::Column::OwnerAgentId.eq(agent_id))
            .order_by_asc(entity::card_template::Column::AgentName)
            .order_by_asc(entity::card::Column::MintNumber)
            .all(self.db)
            .await?;

        results.into_iter().map(join_template).collect()
    }

    /// Gets the cards with the given IDs that still exist, in the order of `card_ids`.
    pub async fn get_by_ids(&self, card_ids: &[String]) -> Result<Vec<Card>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = entity::prelude::Card::find()
            .find_also_related(entity::prelude::CardTemplate)
            .filter(entity::card::Column::Id.is_in(card_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut cards = results
            .into_iter()
            .map(join_template)
            .collect::<Result<Vec<_>, _>>()?;
        cards.sort_by_key(|card| card_ids.iter().position(|id| *id == card.id));

        Ok(cards)
    }

    /// Returns the IDs from `card_ids` that `agent_id` does not own (or that do not exist).
    pub async fn find_not_owned(
        &self,
        card_ids: &[String],
        agent_id: &str,
    ) -> Result<Vec<String>, AppError> {
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let owned: Vec<String> = entity::prelude::Card::find()
            .filter(entity::card::Column::Id.is_in(card_ids.to_vec()))
            .filter(entity::card::Column::OwnerAgentId.eq(agent_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|card| card.id)
            .collect();

        Ok(card_ids
            .iter()
            .filter(|id| !owned.contains(id))
            .cloned()
            .collect())
    }

    pub async fn count_by_owner(&self, agent_id: &str) -> Result<u64, AppError> {
        let count = entity::prelude::Card::find()
            .filter(entity::card::Column::OwnerAgentId.eq(agent_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Moves the listed cards from `from_agent_id` to `to_agent_id`.
    ///
    /// Only cards still owned by `from_agent_id` move.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cards transferred
    pub async fn transfer(
        &self,
        card_ids: &[String],
        from_agent_id: &str,
        to_agent_id: &str,
    ) -> Result<u64, AppError> {
        if card_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Card::update_many()
            .col_expr(
                entity::card::Column::OwnerAgentId,
                Expr::value(to_agent_id.to_string()),
            )
            .filter(entity::card::Column::Id.is_in(card_ids.to_vec()))
            .filter(entity::card::Column::OwnerAgentId.eq(from_agent_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn join_template(
    (card, template): (entity::card::Model, Option<entity::card_template::Model>),
) -> Result<Card, AppError> {
    let template = template.ok_or_else(|| {
        AppError::InternalError(format!("Card {} has no template", card.id))
    })?;

    Card::from_entity(card, template)
}
