use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A tournament together with the calendar year of its owning event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub tournament_id: i32,
    pub event_id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub year: i32,
    pub complete: bool,
    /// Cleared for side events that must not count toward Angler of the Year.
    pub aoy_points: bool,
    pub entry_fee: Decimal,
}

impl Tournament {
    pub fn counts_toward_aoy(&self, year: i32) -> bool {
        self.year == year && self.complete && self.aoy_points
    }
}
