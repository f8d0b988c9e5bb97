use scoring::models::Tournament;
use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::TournamentRow;

const TOURNAMENT_COLUMNS: &str = r#"
    SELECT t.tournament_id, t.event_id, t.name, e.event_date, e.year,
           t.complete, t.aoy_points, t.entry_fee
    FROM tournaments t
    INNER JOIN events e ON t.event_id = e.event_id
"#;

/// Read access to tournaments and the event year they belong to
pub struct TournamentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TournamentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a tournament by ID
    pub async fn find_by_id(&self, tournament_id: i32) -> Result<Tournament> {
        let sql = format!("{} WHERE t.tournament_id = $1", TOURNAMENT_COLUMNS);

        let row = sqlx::query_as::<_, TournamentRow>(&sql)
            .bind(tournament_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(row.into())
    }

    /// All tournaments held in a year, in calendar order
    pub async fn list_for_year(&self, year: i32) -> Result<Vec<Tournament>> {
        let sql = format!(
            "{} WHERE e.year = $1 ORDER BY e.event_date, t.tournament_id",
            TOURNAMENT_COLUMNS
        );

        let rows = sqlx::query_as::<_, TournamentRow>(&sql)
            .bind(year)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Tournament::from).collect())
    }
}
