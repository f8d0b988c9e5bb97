use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One angler's weigh-in for one tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnglerResult {
    pub result_id: i32,
    pub tournament_id: i32,
    pub angler_id: i32,
    pub num_fish: i32,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub dead_fish_penalty: Decimal,
    pub disqualified: bool,
    pub buy_in: bool,
    /// Membership at the time of the tournament; guests never rank.
    pub was_member: bool,
}

/// Scoring tier of a result, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishStatus {
    Weighed,
    ZeroWeight,
    BuyIn,
    Disqualified,
}

impl AnglerResult {
    /// Gross weight less the dead fish penalty, never below zero.
    pub fn final_weight(&self) -> Decimal {
        (self.total_weight - self.dead_fish_penalty).max(Decimal::ZERO)
    }

    pub fn status(&self) -> FinishStatus {
        if self.disqualified {
            FinishStatus::Disqualified
        } else if self.buy_in {
            FinishStatus::BuyIn
        } else if self.final_weight() > Decimal::ZERO {
            FinishStatus::Weighed
        } else {
            FinishStatus::ZeroWeight
        }
    }

    /// Weight used for ordering: only weighed results carry weight into the ranking.
    pub fn ranking_weight(&self) -> Decimal {
        match self.status() {
            FinishStatus::Weighed => self.final_weight(),
            _ => Decimal::ZERO,
        }
    }
}
