use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnglerOfYearEntry {
    pub year: i32,
    pub angler_id: i32,
    pub total_points: i32,
    pub tournaments_fished: u32,
    pub total_weight: Decimal,
    pub biggest_bass: Decimal,
    pub yearly_rank: i32,
}

impl AnglerOfYearEntry {
    /// Points per tournament fished, to two places.
    pub fn average_points(&self) -> Decimal {
        if self.tournaments_fished == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.total_points) / Decimal::from(self.tournaments_fished)).round_dp(2)
    }
}
