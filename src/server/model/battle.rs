//! Battle models and outcome rules.

use chrono::{DateTime, Utc};

use crate::{
    model::battle::{BattleHistoryEntryDto, BattleResultDto, BattleSideDto, PackRewardDto},
    server::{error::AppError, model::pack::PackType},
};

/// Random roll added to each side's power, drawn from `0..ROLL_RANGE`.
pub const ROLL_RANGE: i32 = 50;
pub const ELO_WIN: i32 = 25;
pub const ELO_LOSS: i32 = 20;
/// A premium pack is granted every this many wins.
pub const WINS_PER_PACK_REWARD: i32 = 3;
pub const WIN_REWARD_PACK: PackType = PackType::Premium;

string_enum! {
    pub enum BattleStatus {
        Pending => "pending",
        Completed => "completed",
        Declined => "declined",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    ChallengerWins,
    DefenderWins,
    Draw,
}

impl BattleOutcome {
    /// Higher power wins; equal power is a draw.
    pub fn from_powers(challenger_power: i32, defender_power: i32) -> Self {
        match challenger_power.cmp(&defender_power) {
            std::cmp::Ordering::Greater => BattleOutcome::ChallengerWins,
            std::cmp::Ordering::Less => BattleOutcome::DefenderWins,
            std::cmp::Ordering::Equal => BattleOutcome::Draw,
        }
    }

    /// Returns `(winner, loser)` or `None` for a draw.
    pub fn winner_and_loser<'a>(
        &self,
        challenger_id: &'a str,
        defender_id: &'a str,
    ) -> Option<(&'a str, &'a str)> {
        match self {
            BattleOutcome::ChallengerWins => Some((challenger_id, defender_id)),
            BattleOutcome::DefenderWins => Some((defender_id, challenger_id)),
            BattleOutcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Battle {
    pub id: String,
    pub challenger_id: String,
    pub defender_id: String,
    pub challenger_card_id: String,
    pub defender_card_id: Option<String>,
    pub challenger_power: Option<i32>,
    pub defender_power: Option<i32>,
    pub winner_id: Option<String>,
    pub status: BattleStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Battle {
    pub fn from_entity(entity: entity::battle::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            challenger_id: entity.challenger_id,
            defender_id: entity.defender_id,
            challenger_card_id: entity.challenger_card_id,
            defender_card_id: entity.defender_card_id,
            challenger_power: entity.challenger_power,
            defender_power: entity.defender_power,
            winner_id: entity.winner_id,
            status: BattleStatus::from_stored(&entity.status)?,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        })
    }
}

/// Values written when a pending battle is resolved.
#[derive(Debug, Clone)]
pub struct CompleteBattleParam {
    pub defender_card_id: String,
    pub challenger_power: i32,
    pub defender_power: i32,
    pub winner_id: Option<String>,
}

/// One side of a resolved battle.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSide {
    pub agent_id: String,
    pub name: String,
    pub card_name: String,
    pub power: i32,
}

impl BattleSide {
    fn into_dto(self) -> BattleSideDto {
        BattleSideDto {
            name: self.name,
            card: self.card_name,
            power: self.power,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BattleResult {
    pub battle_id: String,
    pub challenger: BattleSide,
    pub defender: BattleSide,
    pub outcome: BattleOutcome,
    /// Pack granted to the winner for reaching the win-streak threshold.
    pub pack_reward: Option<PackType>,
}

impl BattleResult {
    pub fn winner_id(&self) -> Option<&str> {
        self.outcome
            .winner_and_loser(&self.challenger.agent_id, &self.defender.agent_id)
            .map(|(winner, _)| winner)
    }

    pub fn into_dto(self) -> (BattleResultDto, Option<PackRewardDto>) {
        let winner = self.winner_id().unwrap_or("draw").to_string();
        let pack_reward = self.pack_reward.map(|pack_type| PackRewardDto {
            awarded: true,
            pack_type: pack_type.as_str().to_string(),
            message: format!(
                "{} wins reached: you received a {} pack!",
                WINS_PER_PACK_REWARD, pack_type
            ),
        });

        (
            BattleResultDto {
                id: self.battle_id,
                challenger: self.challenger.into_dto(),
                defender: self.defender.into_dto(),
                winner,
            },
            pack_reward,
        )
    }
}

/// A completed battle with agent and card names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleHistoryEntry {
    pub battle: Battle,
    pub challenger_name: String,
    pub defender_name: String,
    pub challenger_card_name: String,
    pub defender_card_name: Option<String>,
}

impl BattleHistoryEntry {
    pub fn into_dto(self) -> BattleHistoryEntryDto {
        BattleHistoryEntryDto {
            id: self.battle.id,
            challenger_id: self.battle.challenger_id,
            challenger_name: self.challenger_name,
            defender_id: self.battle.defender_id,
            defender_name: self.defender_name,
            challenger_card_name: self.challenger_card_name,
            defender_card_name: self.defender_card_name,
            challenger_power: self.battle.challenger_power,
            defender_power: self.battle.defender_power,
            winner_id: self.battle.winner_id,
            created_at: self.battle.created_at,
            completed_at: self.battle.completed_at,
        }
    }
}
