use rust_decimal::Decimal;
use scoring::models::Payout;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayoutResponse {
    pub entry_fee: Decimal,
    pub anglers: u32,
    pub total: Decimal,
    pub pot: Decimal,
    pub big_bass: Decimal,
    pub club: Decimal,
    pub charity: Decimal,
}

impl From<Payout> for PayoutResponse {
    fn from(payout: Payout) -> Self {
        Self {
            entry_fee: payout.entry_fee,
            anglers: payout.anglers,
            total: payout.total,
            pot: payout.pot,
            big_bass: payout.big_bass,
            club: payout.club,
            charity: payout.charity,
        }
    }
}

pub const MAX_ENTRY_FEE: u32 = 10_000;

/// Query for splitting an arbitrary fee and field size
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PayoutPreviewQuery {
    #[validate(custom(function = "validate_entry_fee"))]
    pub entry_fee: Decimal,

    #[validate(range(max = 500, message = "anglers must be at most 500"))]
    pub anglers: u32,
}

fn validate_entry_fee(entry_fee: &Decimal) -> Result<(), ValidationError> {
    if *entry_fee <= Decimal::ZERO {
        let mut error = ValidationError::new("entry_fee");
        error.message = Some("Entry fee must be positive".into());
        return Err(error);
    }
    if *entry_fee > Decimal::from(MAX_ENTRY_FEE) {
        let mut error = ValidationError::new("entry_fee");
        error.message = Some(format!("Entry fee must be at most {}", MAX_ENTRY_FEE).into());
        return Err(error);
    }
    if entry_fee.scale() > 2 {
        let mut error = ValidationError::new("entry_fee");
        error.message = Some("Entry fee must be in whole cents".into());
        return Err(error);
    }
    Ok(())
}
