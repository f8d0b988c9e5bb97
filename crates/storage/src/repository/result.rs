use std::collections::HashMap;

use scoring::models::AnglerResult;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::ResultRow;

const RESULT_COLUMNS: &str = r#"
    SELECT result_id, tournament_id, angler_id, num_fish, total_weight,
           big_bass_weight, dead_fish_penalty, disqualified, buy_in, was_member
    FROM results
"#;

pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every weigh-in for a tournament, guests included
    pub async fn list_for_tournament(&self, tournament_id: i32) -> Result<Vec<AnglerResult>> {
        let sql = format!("{} WHERE tournament_id = $1 ORDER BY result_id", RESULT_COLUMNS);

        let rows = sqlx::query_as::<_, ResultRow>(&sql)
            .bind(tournament_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(AnglerResult::from).collect())
    }

    /// Weigh-ins for several tournaments, grouped by tournament id
    pub async fn list_for_tournaments(
        &self,
        tournament_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<AnglerResult>>> {
        let sql = format!(
            "{} WHERE tournament_id = ANY($1) ORDER BY tournament_id, result_id",
            RESULT_COLUMNS
        );

        let rows = sqlx::query_as::<_, ResultRow>(&sql)
            .bind(tournament_ids)
            .fetch_all(self.pool)
            .await?;

        let mut grouped: HashMap<i32, Vec<AnglerResult>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.tournament_id)
                .or_default()
                .push(row.into());
        }

        Ok(grouped)
    }
}
