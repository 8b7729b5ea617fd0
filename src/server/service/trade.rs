use std::collections::HashSet;

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{agent_stats::AgentStatsRepository, card::CardRepository, trade::TradeRepository},
    error::AppError,
    model::{
        agent::{Agent, StatsDelta},
        notification::{CreateNotificationParam, NotificationType},
        quest::QuestGoal,
        trade::{Trade, TradeStatus},
    },
    service::{
        achievement::AchievementService, agent::AgentService,
        notification::NotificationService, quest::QuestService,
    },
};

pub struct TradeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TradeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Offers cards to another agent in exchange for some of theirs.
    ///
    /// Only the offered cards are checked here; wanted cards are checked on acceptance.
    ///
    /// # Returns
    /// - `Ok(Trade)` - Pending trade
    /// - `Err(AppError::BadRequest)` - Empty or duplicate offer, unowned card, or self-trade
    pub async fn request(
        &self,
        from: &Agent,
        to_moltbook_id: &str,
        offer: Vec<String>,
        want: Vec<String>,
    ) -> Result<Trade, AppError> {
        if offer.is_empty() {
            return Err(AppError::bad_request("Offer at least one card"));
        }
        let mut seen = HashSet::new();
        if !offer.iter().chain(want.iter()).all(|id| seen.insert(id)) {
            return Err(AppError::bad_request("A card may only appear once in a trade"));
        }

        let not_owned = CardRepository::new(self.db)
            .find_not_owned(&offer, &from.id)
            .await?;
        if let Some(card_id) = not_owned.first() {
            return Err(AppError::bad_request(format!(
                "You don't own card {}",
                card_id
            )));
        }

        let target = AgentService::new(self.db)
            .get_or_create(to_moltbook_id, to_moltbook_id)
            .await?;
        if target.id == from.id {
            return Err(AppError::bad_request("You can't trade with yourself"));
        }

        let trade = TradeRepository::new(self.db)
            .create(&from.id, &target.id, &offer, &want)
            .await?;

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    target.id.as_str(),
                    NotificationType::Trade,
                    "New trade offer",
                    format!(
                        "{} offered {} card(s) for {} of yours.",
                        from.name,
                        offer.len(),
                        want.len()
                    ),
                )
                .with_data(json!({ "trade_id": trade.id, "from_agent_id": from.id })),
            )
            .await;

        Ok(trade)
    }

    /// Settles a pending trade addressed to the agent.
    ///
    /// Ownership of every card is re-checked inside the transaction that swaps them, so a
    /// card sold or traded away since the offer was made aborts the whole trade.
    ///
    /// # Returns
    /// - `Ok(Trade)` - Accepted trade
    /// - `Err(AppError::NotFound)` - No pending trade with that ID addressed to the agent
    /// - `Err(AppError::Conflict)` - A card changed hands since the offer
    pub async fn accept(&self, agent: &Agent, trade_id: &str) -> Result<Trade, AppError> {
        let mut trade = TradeRepository::new(self.db)
            .find_pending_for_recipient(trade_id, &agent.id)
            .await?
            .ok_or_else(|| AppError::not_found("Trade not found or not pending"))?;

        let txn = self.db.begin().await?;

        if !TradeRepository::new(&txn)
            .resolve(&trade.id, &agent.id, TradeStatus::Accepted)
            .await?
        {
            return Err(AppError::not_found("Trade not found or not pending"));
        }

        let card_repo = CardRepository::new(&txn);
        let missing_offer = card_repo
            .find_not_owned(&trade.offered_card_ids, &trade.from_agent_id)
            .await?;
        if let Some(card_id) = missing_offer.first() {
            return Err(AppError::conflict(format!(
                "Card {} is no longer owned by the requester",
                card_id
            )));
        }
        let missing_want = card_repo
            .find_not_owned(&trade.wanted_card_ids, &agent.id)
            .await?;
        if let Some(card_id) = missing_want.first() {
            return Err(AppError::conflict(format!(
                "You no longer own card {}",
                card_id
            )));
        }

        card_repo
            .transfer(&trade.offered_card_ids, &trade.from_agent_id, &agent.id)
            .await?;
        card_repo
            .transfer(&trade.wanted_card_ids, &agent.id, &trade.from_agent_id)
            .await?;

        let stats_repo = AgentStatsRepository::new(&txn);
        stats_repo
            .apply(
                &trade.from_agent_id,
                StatsDelta {
                    trades_completed: 1,
                    cards_collected: trade.wanted_card_ids.len() as i32,
                    ..Default::default()
                },
            )
            .await?;
        stats_repo
            .apply(
                &agent.id,
                StatsDelta {
                    trades_completed: 1,
                    cards_collected: trade.offered_card_ids.len() as i32,
                    ..Default::default()
                },
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Trade {} accepted: {} <-> {}",
            trade.id,
            trade.from_agent_id,
            agent.id
        );

        trade.status = TradeStatus::Accepted;
        self.after_trade(&trade, agent).await;

        Ok(trade)
    }

    pub async fn decline(&self, agent_id: &str, trade_id: &str) -> Result<(), AppError> {
        if !TradeRepository::new(self.db)
            .resolve(trade_id, agent_id, TradeStatus::Declined)
            .await?
        {
            return Err(AppError::not_found("Trade not found or not pending"));
        }

        Ok(())
    }

    async fn after_trade(&self, trade: &Trade, acceptor: &Agent) {
        let quests = QuestService::new(self.db);
        let achievements = AchievementService::new(self.db);

        for agent_id in [&trade.from_agent_id, &acceptor.id] {
            quests
                .record_progress_logged(agent_id, QuestGoal::TradesCompleted, 1)
                .await;
            achievements.check_logged(agent_id).await;
        }

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    trade.from_agent_id.as_str(),
                    NotificationType::Trade,
                    "Trade accepted",
                    format!("{} accepted your trade offer.", acceptor.name),
                )
                .with_data(json!({ "trade_id": trade.id })),
            )
            .await;
    }
}
