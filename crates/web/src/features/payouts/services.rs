use storage::{
    dto::payout::{PayoutPreviewQuery, PayoutResponse},
    error::Result,
    services::standings,
};

/// Split an arbitrary entry fee and field size
pub fn preview_payout(query: &PayoutPreviewQuery) -> Result<PayoutResponse> {
    standings::payout_preview(query)
}
