use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_tournament_payout, get_tournament_standings};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:tournament_id/standings", get(get_tournament_standings))
        .route("/:tournament_id/payout", get(get_tournament_payout))
}
