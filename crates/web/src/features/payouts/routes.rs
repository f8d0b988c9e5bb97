use axum::{Router, routing::get};
use storage::Database;

use super::handlers::preview_payout;

pub fn routes() -> Router<Database> {
    Router::new().route("/preview", get(preview_payout))
}
