use chrono::NaiveDate;
use rust_decimal::Decimal;
use scoring::models::{
    BigBassAward, FinishStatus, StandingEntry, TeamStanding, Tournament, TournamentSummary,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentInfo {
    pub tournament_id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub year: i32,
    pub complete: bool,
    pub aoy_points: bool,
    pub entry_fee: Decimal,
}

impl From<&Tournament> for TournamentInfo {
    fn from(tournament: &Tournament) -> Self {
        Self {
            tournament_id: tournament.tournament_id,
            name: tournament.name.clone(),
            date: tournament.date,
            year: tournament.year,
            complete: tournament.complete,
            aoy_points: tournament.aoy_points,
            entry_fee: tournament.entry_fee,
        }
    }
}

/// Scoring tier of a standings entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StandingStatus {
    Weighed,
    ZeroWeight,
    BuyIn,
    Disqualified,
}

impl From<FinishStatus> for StandingStatus {
    fn from(status: FinishStatus) -> Self {
        match status {
            FinishStatus::Weighed => Self::Weighed,
            FinishStatus::ZeroWeight => Self::ZeroWeight,
            FinishStatus::BuyIn => Self::BuyIn,
            FinishStatus::Disqualified => Self::Disqualified,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StandingEntryResponse {
    pub angler_id: i32,
    pub place: i32,
    pub points: i32,
    pub status: StandingStatus,
    pub num_fish: i32,
    pub final_weight: Decimal,
    pub big_bass_weight: Decimal,
}

impl From<&StandingEntry> for StandingEntryResponse {
    fn from(entry: &StandingEntry) -> Self {
        Self {
            angler_id: entry.angler_id,
            place: entry.place,
            points: entry.points,
            status: entry.status.into(),
            num_fish: entry.num_fish,
            final_weight: entry.final_weight,
            big_bass_weight: entry.big_bass_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentSummaryResponse {
    pub anglers: u32,
    pub anglers_weighed: u32,
    pub zero_weights: u32,
    pub buy_ins: u32,
    pub disqualified: u32,
    pub total_fish: i32,
    pub total_weight: Decimal,
    pub heaviest_bag: Decimal,
}

impl From<TournamentSummary> for TournamentSummaryResponse {
    fn from(summary: TournamentSummary) -> Self {
        Self {
            anglers: summary.anglers,
            anglers_weighed: summary.anglers_weighed,
            zero_weights: summary.zero_weights,
            buy_ins: summary.buy_ins,
            disqualified: summary.disqualified,
            total_fish: summary.total_fish,
            total_weight: summary.total_weight,
            heaviest_bag: summary.heaviest_bag,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BigBassResponse {
    pub weight: Decimal,
    pub angler_ids: Vec<i32>,
}

impl From<BigBassAward> for BigBassResponse {
    fn from(award: BigBassAward) -> Self {
        Self {
            weight: award.weight,
            angler_ids: award.angler_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamStandingResponse {
    pub team_result_id: i32,
    pub angler1_id: i32,
    pub angler2_id: Option<i32>,
    pub place_finish: i32,
    pub num_fish: i32,
    pub total_weight: Decimal,
}

impl From<TeamStanding> for TeamStandingResponse {
    fn from(team: TeamStanding) -> Self {
        Self {
            team_result_id: team.team_result_id,
            angler1_id: team.angler1_id,
            angler2_id: team.angler2_id,
            place_finish: team.place_finish,
            num_fish: team.num_fish,
            total_weight: team.total_weight,
        }
    }
}

/// Everything the results page shows for one tournament
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TournamentStandingsResponse {
    pub tournament: TournamentInfo,
    pub summary: TournamentSummaryResponse,
    pub standings: Vec<StandingEntryResponse>,
    /// Absent when no fish met the big-bass minimum
    pub big_bass: Option<BigBassResponse>,
    pub teams: Vec<TeamStandingResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_status_serializes_like_finish_status() {
        for status in [
            FinishStatus::Weighed,
            FinishStatus::ZeroWeight,
            FinishStatus::BuyIn,
            FinishStatus::Disqualified,
        ] {
            assert_eq!(
                serde_json::to_value(StandingStatus::from(status)).unwrap(),
                serde_json::to_value(status).unwrap()
            );
        }
    }
}
