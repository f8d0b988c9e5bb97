use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::{payout::PayoutResponse, standings::TournamentStandingsResponse},
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/standings",
    params(
        ("tournament_id" = i32, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Tournament standings computed", body = TournamentStandingsResponse),
        (status = 404, description = "Tournament not found"),
        (status = 422, description = "Stored results failed validation")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament_standings(
    State(db): State<Database>,
    Path(tournament_id): Path<i32>,
) -> WebResult<Json<TournamentStandingsResponse>> {
    let standings = services::get_tournament_standings(db.pool(), tournament_id).await?;

    Ok(Json(standings))
}

#[utoipa::path(
    get,
    path = "/api/tournaments/{tournament_id}/payout",
    params(
        ("tournament_id" = i32, Path, description = "Tournament id")
    ),
    responses(
        (status = 200, description = "Entry fees split into pot, big bass, club and charity", body = PayoutResponse),
        (status = 404, description = "Tournament not found"),
        (status = 422, description = "Stored results or entry fee failed validation")
    ),
    tag = "tournaments"
)]
pub async fn get_tournament_payout(
    State(db): State<Database>,
    Path(tournament_id): Path<i32>,
) -> WebResult<Json<PayoutResponse>> {
    let payout = services::get_tournament_payout(db.pool(), tournament_id).await?;

    Ok(Json(payout))
}
