use axum::{Json, extract::Query};
use storage::dto::payout::{PayoutPreviewQuery, PayoutResponse};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/payouts/preview",
    params(PayoutPreviewQuery),
    responses(
        (status = 200, description = "Entry fees split into pot, big bass, club and charity", body = PayoutResponse),
        (status = 400, description = "Invalid entry fee or angler count")
    ),
    tag = "payouts"
)]
pub async fn preview_payout(
    Query(query): Query<PayoutPreviewQuery>,
) -> WebResult<Json<PayoutResponse>> {
    query.validate()?;

    let payout = services::preview_payout(&query)?;

    Ok(Json(payout))
}
