use scoring::models::TeamResult;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::TeamResultRow;

pub struct TeamResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_tournament(&self, tournament_id: i32) -> Result<Vec<TeamResult>> {
        let rows = sqlx::query_as::<_, TeamResultRow>(
            r#"
            SELECT team_result_id, tournament_id, angler1_id, angler2_id, num_fish, total_weight
            FROM team_results
            WHERE tournament_id = $1
            ORDER BY team_result_id
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(TeamResult::from).collect())
    }
}
