use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Entry fees collected for a tournament, split into the club's buckets.
/// The four shares always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub entry_fee: Decimal,
    pub anglers: u32,
    pub total: Decimal,
    pub pot: Decimal,
    pub big_bass: Decimal,
    pub club: Decimal,
    pub charity: Decimal,
}

impl Payout {
    pub fn shares_total(&self) -> Decimal {
        self.pot + self.big_bass + self.club + self.charity
    }
}
