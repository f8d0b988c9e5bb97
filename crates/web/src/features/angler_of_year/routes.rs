use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_angler_of_year;

pub fn routes() -> Router<Database> {
    Router::new().route("/:year", get(get_angler_of_year))
}
