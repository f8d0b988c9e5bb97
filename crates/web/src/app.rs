use axum::{Json, Router, routing::get};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::tournaments::handlers::get_tournament_standings,
        features::tournaments::handlers::get_tournament_payout,
        features::angler_of_year::handlers::get_angler_of_year,
        features::payouts::handlers::preview_payout,
    ),
    components(
        schemas(
            storage::dto::standings::TournamentStandingsResponse,
            storage::dto::standings::TournamentInfo,
            storage::dto::standings::TournamentSummaryResponse,
            storage::dto::standings::StandingEntryResponse,
            storage::dto::standings::StandingStatus,
            storage::dto::standings::BigBassResponse,
            storage::dto::standings::TeamStandingResponse,
            storage::dto::angler_of_year::AnglerOfYearResponse,
            storage::dto::angler_of_year::AnglerOfYearEntryResponse,
            storage::dto::payout::PayoutResponse,
        )
    ),
    tags(
        (name = "tournaments", description = "Per-tournament standings and payouts"),
        (name = "angler-of-year", description = "Season points race"),
        (name = "payouts", description = "Entry fee split calculator"),
    )
)]
pub struct ApiDoc;

pub fn router(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api/tournaments", features::tournaments::routes::routes())
        .nest(
            "/api/angler-of-year",
            features::angler_of_year::routes::routes(),
        )
        .nest("/api/payouts", features::payouts::routes::routes())
        .layer(cors)
        .with_state(db)
}
