//! Agent identity, stats and profile models.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{agent::AgentProfileDto, api::DailyLoginDto};

/// ELO rating of a freshly created agent.
pub const DEFAULT_ELO: i32 = 1000;

/// Starter packs granted once when an agent is first seen.
pub const SIGNUP_STARTER_PACKS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: String,
    pub moltbook_id: String,
    pub name: String,
    pub karma: i32,
    pub last_login_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Agent {
    pub fn from_entity(entity: entity::agent::Model) -> Self {
        Self {
            id: entity.id,
            moltbook_id: entity.moltbook_id,
            name: entity.name,
            karma: entity.karma,
            last_login_date: entity.last_login_date,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentStats {
    pub agent_id: String,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub packs_opened: i32,
    pub cards_collected: i32,
    pub trades_completed: i32,
    pub battles_since_last_pack: i32,
    pub weekly_leaderboard_rank: Option<i32>,
    pub last_weekly_reward: Option<i32>,
}

impl AgentStats {
    pub fn from_entity(entity: entity::agent_stats::Model) -> Self {
        Self {
            agent_id: entity.agent_id,
            elo: entity.elo,
            wins: entity.wins,
            losses: entity.losses,
            draws: entity.draws,
            packs_opened: entity.packs_opened,
            cards_collected: entity.cards_collected,
            trades_completed: entity.trades_completed,
            battles_since_last_pack: entity.battles_since_last_pack,
            weekly_leaderboard_rank: entity.weekly_leaderboard_rank,
            last_weekly_reward: entity.last_weekly_reward,
        }
    }

    pub fn battles_completed(&self) -> i32 {
        self.wins + self.losses + self.draws
    }
}

/// Relative change applied to an agent's stats row in a single update.
///
/// Zero fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsDelta {
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub packs_opened: i32,
    pub cards_collected: i32,
    pub trades_completed: i32,
    pub battles_since_last_pack: i32,
}

/// Result of the once-per-UTC-day login check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyLogin {
    pub pack_given: bool,
    pub is_new_day: bool,
}

impl DailyLogin {
    /// Only a granted pack is surfaced to the client.
    pub fn into_dto(self) -> Option<DailyLoginDto> {
        self.pack_given.then(|| DailyLoginDto {
            pack_given: true,
            message: "Daily login bonus: you received a standard pack!".to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    pub agent: Agent,
    pub stats: AgentStats,
    pub card_count: u64,
    pub friend_count: u64,
}

impl AgentProfile {
    pub fn into_dto(self) -> AgentProfileDto {
        AgentProfileDto {
            id: self.agent.id,
            name: self.agent.name,
            created_at: self.agent.created_at,
            karma: self.agent.karma,
            elo: self.stats.elo,
            wins: self.stats.wins,
            losses: self.stats.losses,
            draws: self.stats.draws,
            packs_opened: self.stats.packs_opened,
            cards_collected: self.card_count,
            friend_count: self.friend_count,
            trades_completed: self.stats.trades_completed,
        }
    }
}
