use sqlx::PgPool;
use storage::{
    dto::{payout::PayoutResponse, standings::TournamentStandingsResponse},
    error::Result,
    services::standings,
};

/// Individual, team and big-bass results for one tournament
pub async fn get_tournament_standings(
    pool: &PgPool,
    tournament_id: i32,
) -> Result<TournamentStandingsResponse> {
    standings::tournament_standings(pool, tournament_id).await
}

/// Entry fee split for one tournament
pub async fn get_tournament_payout(pool: &PgPool, tournament_id: i32) -> Result<PayoutResponse> {
    standings::tournament_payout(pool, tournament_id).await
}
