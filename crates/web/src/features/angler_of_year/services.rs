use sqlx::PgPool;
use storage::{dto::angler_of_year::AnglerOfYearResponse, error::Result, services::standings};

/// Angler of the Year ranking for a season
pub async fn get_angler_of_year(pool: &PgPool, year: i32) -> Result<AnglerOfYearResponse> {
    standings::angler_of_year(pool, year).await
}
