use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::server::{
    data::{
        agent::AgentRepository, agent_stats::AgentStatsRepository, battle::BattleRepository,
        card::CardRepository, pack::PackRepository,
    },
    error::AppError,
    model::{
        agent::{Agent, StatsDelta},
        battle::{
            Battle, BattleOutcome, BattleResult, BattleSide, CompleteBattleParam, ELO_LOSS,
            ELO_WIN, ROLL_RANGE, WINS_PER_PACK_REWARD, WIN_REWARD_PACK,
        },
        notification::{CreateNotificationParam, NotificationType},
        quest::QuestGoal,
    },
    service::{
        achievement::AchievementService, agent::AgentService,
        notification::NotificationService, quest::QuestService,
    },
};

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Challenges another agent with one of the challenger's cards.
    ///
    /// The opponent is registered on first sight and notified of the challenge.
    ///
    /// # Returns
    /// - `Ok(Battle)` - Pending battle
    /// - `Err(AppError::BadRequest)` - Card not owned by the challenger, or self-challenge
    pub async fn challenge(
        &self,
        challenger: &Agent,
        opponent_moltbook_id: &str,
        card_id: &str,
    ) -> Result<Battle, AppError> {
        CardRepository::new(self.db)
            .find_owned(card_id, &challenger.id)
            .await?
            .ok_or_else(|| AppError::bad_request("You don't own this card"))?;

        let opponent = AgentService::new(self.db)
            .get_or_create(opponent_moltbook_id, opponent_moltbook_id)
            .await?;
        if opponent.id == challenger.id {
            return Err(AppError::bad_request("You can't battle yourself"));
        }

        let battle = BattleRepository::new(self.db)
            .create(&challenger.id, &opponent.id, card_id)
            .await?;

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    opponent.id.as_str(),
                    NotificationType::Battle,
                    "New battle challenge",
                    format!("{} challenged you to a battle!", challenger.name),
                )
                .with_data(json!({ "battle_id": battle.id, "challenger_id": challenger.id })),
            )
            .await;

        Ok(battle)
    }

    /// Accepts a pending challenge with one of the defender's cards and resolves it.
    pub async fn accept(
        &self,
        defender: &Agent,
        battle_id: &str,
        card_id: &str,
    ) -> Result<BattleResult, AppError> {
        let rolls = {
            let mut rng = rand::rng();
            (
                rng.random_range(0..ROLL_RANGE),
                rng.random_range(0..ROLL_RANGE),
            )
        };

        self.accept_with_rolls(defender, battle_id, card_id, rolls)
            .await
    }

    /// Resolves a battle with fixed `(challenger, defender)` rolls.
    ///
    /// Ownership checks, battle record, stats and the win-streak pack share one
    /// transaction. Quest progress, achievement checks and the challenger's notification
    /// follow and are only logged on failure.
    ///
    /// # Returns
    /// - `Ok(BattleResult)` - Resolved battle
    /// - `Err(AppError::NotFound)` - No pending battle with this agent as defender
    /// - `Err(AppError::BadRequest)` - Defender does not own the card
    /// - `Err(AppError::Conflict)` - Challenger no longer owns their card
    pub async fn accept_with_rolls(
        &self,
        defender: &Agent,
        battle_id: &str,
        card_id: &str,
        (challenger_roll, defender_roll): (i32, i32),
    ) -> Result<BattleResult, AppError> {
        // Card ownership must be read under the transaction that records the result.
        let txn = self.db.begin().await?;

        let battle = BattleRepository::new(&txn)
            .find_pending_for_defender(battle_id, &defender.id)
            .await?
            .ok_or_else(|| AppError::not_found("Battle not found or not pending"))?;

        let card_repo = CardRepository::new(&txn);
        let defender_card = card_repo
            .find_owned(card_id, &defender.id)
            .await?
            .ok_or_else(|| AppError::bad_request("Card not found or not yours"))?;
        let challenger_card = card_repo
            .find_owned(&battle.challenger_card_id, &battle.challenger_id)
            .await?
            .ok_or_else(|| AppError::conflict("Challenger no longer owns their card"))?;

        let challenger_power = challenger_card.total_power().saturating_add(challenger_roll);
        let defender_power = defender_card.total_power().saturating_add(defender_roll);
        let outcome = BattleOutcome::from_powers(challenger_power, defender_power);
        let winner_and_loser = outcome
            .winner_and_loser(&battle.challenger_id, &defender.id)
            .map(|(winner, loser)| (winner.to_string(), loser.to_string()));

        let completed = BattleRepository::new(&txn)
            .complete(
                &battle.id,
                CompleteBattleParam {
                    defender_card_id: defender_card.id.clone(),
                    challenger_power,
                    defender_power,
                    winner_id: winner_and_loser.as_ref().map(|(winner, _)| winner.clone()),
                },
            )
            .await?;
        if !completed {
            return Err(AppError::not_found("Battle not found or not pending"));
        }

        let stats_repo = AgentStatsRepository::new(&txn);
        let mut pack_reward = None;
        match &winner_and_loser {
            Some((winner, loser)) => {
                stats_repo
                    .apply(
                        winner,
                        StatsDelta {
                            elo: ELO_WIN,
                            wins: 1,
                            battles_since_last_pack: 1,
                            ..Default::default()
                        },
                    )
                    .await?;
                stats_repo
                    .apply(
                        loser,
                        StatsDelta {
                            elo: -ELO_LOSS,
                            losses: 1,
                            ..Default::default()
                        },
                    )
                    .await?;

                let streak = stats_repo
                    .find_by_agent_id(winner)
                    .await?
                    .map(|stats| stats.battles_since_last_pack)
                    .unwrap_or_default();
                if streak >= WINS_PER_PACK_REWARD {
                    PackRepository::new(&txn)
                        .create(winner, WIN_REWARD_PACK)
                        .await?;
                    stats_repo.reset_battles_since_last_pack(winner).await?;
                    pack_reward = Some(WIN_REWARD_PACK);
                }
            }
            None => {
                let draw = StatsDelta {
                    draws: 1,
                    ..Default::default()
                };
                stats_repo.apply(&battle.challenger_id, draw).await?;
                stats_repo.apply(&defender.id, draw).await?;
            }
        }

        txn.commit().await?;

        let challenger_name = AgentRepository::new(self.db)
            .find_by_id(&battle.challenger_id)
            .await?
            .map(|agent| agent.name)
            .unwrap_or_else(|| battle.challenger_id.clone());

        let result = BattleResult {
            battle_id: battle.id.clone(),
            challenger: BattleSide {
                agent_id: battle.challenger_id.clone(),
                name: challenger_name,
                card_name: challenger_card.name,
                power: challenger_power,
            },
            defender: BattleSide {
                agent_id: defender.id.clone(),
                name: defender.name.clone(),
                card_name: defender_card.name,
                power: defender_power,
            },
            outcome,
            pack_reward,
        };

        tracing::info!(
            "Battle {} resolved: {} ({}) vs {} ({}), winner {}",
            result.battle_id,
            result.challenger.agent_id,
            challenger_power,
            result.defender.agent_id,
            defender_power,
            result.winner_id().unwrap_or("draw")
        );

        self.after_battle(&result).await;

        Ok(result)
    }

    /// Declines a pending challenge addressed to the agent.
    pub async fn decline(&self, defender_id: &str, battle_id: &str) -> Result<(), AppError> {
        if !BattleRepository::new(self.db)
            .decline(battle_id, defender_id)
            .await?
        {
            return Err(AppError::not_found("Battle not found or not pending"));
        }

        Ok(())
    }

    async fn after_battle(&self, result: &BattleResult) {
        let quests = QuestService::new(self.db);
        let achievements = AchievementService::new(self.db);

        for agent_id in [&result.challenger.agent_id, &result.defender.agent_id] {
            quests
                .record_progress_logged(agent_id, QuestGoal::BattlesCompleted, 1)
                .await;
        }
        if let Some(winner_id) = result.winner_id() {
            quests
                .record_progress_logged(winner_id, QuestGoal::BattlesWon, 1)
                .await;
        }
        for agent_id in [&result.challenger.agent_id, &result.defender.agent_id] {
            achievements.check_logged(agent_id).await;
        }

        let message = match result.winner_id() {
            Some(winner_id) if winner_id == result.challenger.agent_id => {
                format!("You won your battle against {}!", result.defender.name)
            }
            Some(_) => format!("You lost your battle against {}.", result.defender.name),
            None => format!("Your battle against {} ended in a draw.", result.defender.name),
        };

        NotificationService::new(self.db)
            .notify(
                CreateNotificationParam::new(
                    result.challenger.agent_id.as_str(),
                    NotificationType::Battle,
                    "Battle resolved",
                    message,
                )
                .with_data(json!({
                    "battle_id": result.battle_id,
                    "winner": result.winner_id().unwrap_or("draw"),
                })),
            )
            .await;
    }
}
