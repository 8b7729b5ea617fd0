use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        agent::AgentRepository, agent_stats::AgentStatsRepository, battle::BattleRepository,
        card::CardRepository, friend::FriendRepository, trade::TradeRepository,
    },
    error::AppError,
    model::{agent::AgentProfile, battle::BattleHistoryEntry, trade::TradeHistoryEntry},
    service::MAX_PAGE_SIZE,
};

/// Default number of entries returned by the history endpoints.
pub const HISTORY_LIMIT: u64 = 20;

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Agent identity, stats and live card and friend counts.
    pub async fn get_profile(&self, agent_id: &str) -> Result<AgentProfile, AppError> {
        let agent = AgentRepository::new(self.db)
            .find_by_id(agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Agent not found"))?;
        let stats = AgentStatsRepository::new(self.db)
            .find_by_agent_id(agent_id)
            .await?
            .ok_or_else(|| AppError::not_found("Agent not found"))?;
        let card_count = CardRepository::new(self.db).count_by_owner(agent_id).await?;
        let friend_count = FriendRepository::new(self.db)
            .count_accepted_for_agent(agent_id)
            .await?;

        Ok(AgentProfile {
            agent,
            stats,
            card_count,
            friend_count,
        })
    }

    /// Completed battles on either side, newest first, with agent and card names.
    ///
    /// `limit` is capped at `MAX_PAGE_SIZE`.
    pub async fn get_battle_history(
        &self,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<BattleHistoryEntry>, AppError> {
        let battles = BattleRepository::new(self.db)
            .get_completed_for_agent(agent_id, limit.min(MAX_PAGE_SIZE))
            .await?;

        let agent_ids: Vec<String> = battles
            .iter()
            .flat_map(|b| [b.challenger_id.clone(), b.defender_id.clone()])
            .collect();
        let names = AgentRepository::new(self.db)
            .names_by_ids(&agent_ids)
            .await?;

        let card_ids: Vec<String> = battles
            .iter()
            .flat_map(|b| {
                std::iter::once(b.challenger_card_id.clone()).chain(b.defender_card_id.clone())
            })
            .collect();
        let card_names: HashMap<String, String> = CardRepository::new(self.db)
            .get_by_ids(&card_ids)
            .await?
            .into_iter()
            .map(|card| (card.id, card.name))
            .collect();

        let name_of = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

        Ok(battles
            .into_iter()
            .map(|battle| BattleHistoryEntry {
                challenger_name: name_of(&battle.challenger_id),
                defender_name: name_of(&battle.defender_id),
                challenger_card_name: card_names
                    .get(&battle.challenger_card_id)
                    .cloned()
                    .unwrap_or_else(|| battle.challenger_card_id.clone()),
                defender_card_name: battle
                    .defender_card_id
                    .as_ref()
                    .and_then(|id| card_names.get(id).cloned()),
                battle,
            })
            .collect())
    }

    /// Accepted and declined trades on either side, most recently resolved first.
    pub async fn get_trade_history(
        &self,
        agent_id: &str,
        limit: u64,
    ) -> Result<Vec<TradeHistoryEntry>, AppError> {
        let trades = TradeRepository::new(self.db)
            .get_resolved_for_agent(agent_id, limit.min(MAX_PAGE_SIZE))
            .await?;

        let agent_ids: Vec<String> = trades
            .iter()
            .flat_map(|t| [t.from_agent_id.clone(), t.to_agent_id.clone()])
            .collect();
        let names = AgentRepository::new(self.db)
            .names_by_ids(&agent_ids)
            .await?;

        let name_of = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

        Ok(trades
            .into_iter()
            .map(|trade| TradeHistoryEntry {
                from_agent_name: name_of(&trade.from_agent_id),
                to_agent_name: name_of(&trade.to_agent_id),
                trade,
            })
            .collect())
    }
}
