use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A boat's combined weigh-in in a team tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResult {
    pub team_result_id: i32,
    pub tournament_id: i32,
    pub angler1_id: i32,
    /// `None` for an angler fishing alone.
    pub angler2_id: Option<i32>,
    pub num_fish: i32,
    pub total_weight: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_result_id: i32,
    pub angler1_id: i32,
    pub angler2_id: Option<i32>,
    pub place_finish: i32,
    pub num_fish: i32,
    pub total_weight: Decimal,
}

impl TeamResult {
    pub fn is_solo(&self) -> bool {
        self.angler2_id.is_none()
    }
}
