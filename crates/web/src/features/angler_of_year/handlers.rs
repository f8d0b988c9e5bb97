use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::angler_of_year::{AnglerOfYearResponse, validate_year},
};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/angler-of-year/{year}",
    params(
        ("year" = i32, Path, description = "Season year")
    ),
    responses(
        (status = 200, description = "Angler of the Year ranking computed", body = AnglerOfYearResponse),
        (status = 400, description = "Year out of range"),
        (status = 422, description = "Stored results failed validation")
    ),
    tag = "angler-of-year"
)]
pub async fn get_angler_of_year(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> WebResult<Json<AnglerOfYearResponse>> {
    validate_year(year).map_err(WebError::BadRequest)?;

    let ranking = services::get_angler_of_year(db.pool(), year).await?;

    Ok(Json(ranking))
}
