use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{card::CardRepository, deck::DeckRepository},
    error::AppError,
    model::deck::{Deck, DeckDetail, MAX_DECKS},
};

pub struct DeckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty deck.
    ///
    /// # Returns
    /// - `Ok(Deck)` - New inactive deck
    /// - `Err(AppError::BadRequest)` - Blank name or deck limit reached
    pub async fn create(
        &self,
        agent_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Deck, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("Deck name is required"));
        }

        let repo = DeckRepository::new(self.db);
        if repo.count_by_agent(agent_id).await? >= MAX_DECKS {
            return Err(AppError::bad_request(format!(
                "Maximum {} decks allowed",
                MAX_DECKS
            )));
        }

        repo.create(agent_id, name, description.unwrap_or_default())
            .await
    }

    /// Replaces the deck's card list.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of cards now in the deck
    /// - `Err(AppError::NotFound)` - Deck is not the agent's
    /// - `Err(AppError::BadRequest)` - A card is not in the agent's collection
    pub async fn update(
        &self,
        agent_id: &str,
        deck_id: &str,
        card_ids: Vec<String>,
    ) -> Result<usize, AppError> {
        let repo = DeckRepository::new(self.db);
        repo.find_for_agent(deck_id, agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Deck not found"))?;

        let not_owned = CardRepository::new(self.db)
            .find_not_owned(&card_ids, agent_id)
            .await?;
        if let Some(card_id) = not_owned.first() {
            return Err(AppError::bad_request(format!(
                "Card {} not found in your collection",
                card_id
            )));
        }

        repo.set_cards(deck_id, &card_ids).await?;

        Ok(card_ids.len())
    }

    pub async fn delete(&self, agent_id: &str, deck_id: &str) -> Result<(), AppError> {
        if !DeckRepository::new(self.db).delete(deck_id, agent_id).await? {
            return Err(AppError::not_found("Deck not found"));
        }

        Ok(())
    }

    /// The deck with its cards resolved.
    pub async fn get(&self, agent_id: &str, deck_id: &str) -> Result<DeckDetail, AppError> {
        let deck = DeckRepository::new(self.db)
            .find_for_agent(deck_id, agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Deck not found"))?;

        self.with_cards(deck).await
    }

    /// The agent's decks, newest first.
    pub async fn list(&self, agent_id: &str) -> Result<Vec<Deck>, AppError> {
        DeckRepository::new(self.db).get_by_agent(agent_id).await
    }

    /// Makes `deck_id` the agent's only active deck.
    pub async fn set_active(&self, agent_id: &str, deck_id: &str) -> Result<(), AppError> {
        DeckRepository::new(self.db)
            .find_for_agent(deck_id, agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Deck not found"))?;

        let txn = self.db.begin().await?;
        DeckRepository::new(&txn)
            .set_active(deck_id, agent_id)
            .await?;
        txn.commit().await?;

        Ok(())
    }

    pub async fn get_active(&self, agent_id: &str) -> Result<DeckDetail, AppError> {
        let deck = DeckRepository::new(self.db)
            .find_active(agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("No active deck set"))?;

        self.with_cards(deck).await
    }

    async fn with_cards(&self, deck: Deck) -> Result<DeckDetail, AppError> {
        let cards = CardRepository::new(self.db)
            .get_by_ids(&deck.card_ids)
            .await?;

        Ok(DeckDetail { deck, cards })
    }
}
