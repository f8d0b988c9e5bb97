use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FinishStatus, Tournament};

/// One angler's computed finish in a tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub tournament_id: i32,
    pub angler_id: i32,
    pub place: i32,
    pub points: i32,
    pub status: FinishStatus,
    pub num_fish: i32,
    pub final_weight: Decimal,
    pub big_bass_weight: Decimal,
}

/// Standings for one tournament, ordered by place then angler id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentStandings {
    pub tournament: Tournament,
    pub entries: Vec<StandingEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub anglers: u32,
    pub anglers_weighed: u32,
    pub zero_weights: u32,
    pub buy_ins: u32,
    pub disqualified: u32,
    pub total_fish: i32,
    pub total_weight: Decimal,
    pub heaviest_bag: Decimal,
}

/// Holder(s) of the heaviest qualifying fish. Tied anglers split the pot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BigBassAward {
    pub weight: Decimal,
    pub angler_ids: Vec<i32>,
}

impl TournamentStandings {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_for(&self, angler_id: i32) -> Option<&StandingEntry> {
        self.entries.iter().find(|e| e.angler_id == angler_id)
    }

    pub fn summary(&self) -> TournamentSummary {
        let mut summary = TournamentSummary::default();

        for entry in &self.entries {
            summary.anglers += 1;
            match entry.status {
                FinishStatus::Weighed => summary.anglers_weighed += 1,
                FinishStatus::ZeroWeight => summary.zero_weights += 1,
                FinishStatus::BuyIn => summary.buy_ins += 1,
                FinishStatus::Disqualified => {
                    summary.disqualified += 1;
                    continue;
                }
            }
            summary.total_fish += entry.num_fish;
            summary.total_weight += entry.final_weight;
            summary.heaviest_bag = summary.heaviest_bag.max(entry.final_weight);
        }

        summary
    }
}
