//! Leaderboard read model.
//!
//! Ranking needs a per-agent owned-card count next to the stats columns, so this is the
//! one query written in SQL instead of the SeaORM query builder.

use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement};

use crate::server::model::leaderboard::{LeaderboardRow, LeaderboardSort};

pub struct LeaderboardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeaderboardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the top `limit` agents ordered by `sort`.
    ///
    /// Ties fall back to ELO, then name.
    pub async fn top(&self, sort: LeaderboardSort, limit: u64) -> Result<Vec<LeaderboardRow>, DbErr> {
        let order_by = match sort {
            LeaderboardSort::Elo => "s.elo DESC, s.wins DESC, a.name ASC",
            LeaderboardSort::Wins => "s.wins DESC, s.elo DESC, a.name ASC",
            LeaderboardSort::Cards => "card_count DESC, s.elo DESC, a.name ASC",
        };

        let sql = format!(
            r#"SELECT a.id AS agent_id,
                      a.name AS name,
                      s.elo AS elo,
                      s.wins AS wins,
                      s.losses AS losses,
                      s.draws AS draws,
                      (SELECT COUNT(*) FROM cards c WHERE c.owner_agent_id = a.id) AS card_count
               FROM agents a
               JOIN agent_stats s ON s.agent_id = a.id
               ORDER BY {}
               LIMIT ?"#,
            order_by
        );

        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [(limit as i64).into()],
        );

        LeaderboardRow::find_by_statement(statement)
            .all(self.db)
            .await
    }
}
