use sea_orm::FromQueryResult;

use crate::model::leaderboard::{LeaderboardEntryDto, WeeklyRewardDto};

/// Number of agents listed on the leaderboard and rewarded weekly.
pub const LEADERBOARD_SIZE: u64 = 10;
pub const WEEKLY_REWARD_PACK: crate::server::model::pack::PackType =
    crate::server::model::pack::PackType::Legendary;

string_enum! {
    pub enum LeaderboardSort {
        Elo => "elo",
        Wins => "wins",
        Cards => "cards",
    }
}

impl LeaderboardSort {
    /// Unknown or missing values fall back to ELO.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(LeaderboardSort::Elo)
    }
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct LeaderboardRow {
    pub agent_id: String,
    pub name: String,
    pub elo: i32,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub card_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub row: LeaderboardRow,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            rank: self.rank,
            agent_id: self.row.agent_id,
            name: self.row.name,
            elo: self.row.elo,
            wins: self.row.wins,
            losses: self.row.losses,
            draws: self.row.draws,
            card_count: self.row.card_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReward {
    pub agent_id: String,
    pub name: String,
    pub rank: u32,
}

impl WeeklyReward {
    pub fn into_dto(self) -> WeeklyRewardDto {
        WeeklyRewardDto {
            agent_id: self.agent_id,
            name: self.name,
            rank: self.rank,
        }
    }
}
