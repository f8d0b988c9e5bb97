//! Angler of the Year: season totals over every complete, points-eligible
//! tournament in a year.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{Result, ResultIssue, ScoringError};
use crate::models::{AnglerOfYearEntry, AnglerResult, Tournament, TournamentStandings};
use crate::standings::calculate_standings;

#[derive(Default)]
struct SeasonTotals {
    total_points: i32,
    tournaments: HashSet<i32>,
    total_weight: Decimal,
    biggest_bass: Decimal,
}

/// Aggregates per-tournament standings into the yearly ranking.
///
/// Ranks are dense over total points. The club rules define no tie-break,
/// so tied anglers share a rank and are listed by angler id.
pub fn aggregate_angler_of_year(
    year: i32,
    standings: &[TournamentStandings],
) -> Result<Vec<AnglerOfYearEntry>> {
    let mut seen_tournaments = HashSet::new();
    let mut totals: BTreeMap<i32, SeasonTotals> = BTreeMap::new();
    let mut issues = Vec::new();

    for tournament_standings in standings {
        let tournament = &tournament_standings.tournament;

        if !seen_tournaments.insert(tournament.tournament_id) {
            return Err(ScoringError::DuplicateTournament(tournament.tournament_id));
        }

        if !tournament.counts_toward_aoy(year) {
            debug!(
                "Skipping tournament {} for {} Angler of the Year (year {}, complete {}, aoy_points {})",
                tournament.tournament_id,
                year,
                tournament.year,
                tournament.complete,
                tournament.aoy_points
            );
            continue;
        }

        for entry in &tournament_standings.entries {
            if entry.tournament_id != tournament.tournament_id {
                issues.push(ResultIssue::UnknownTournament {
                    tournament_id: entry.tournament_id,
                    angler_id: entry.angler_id,
                    expected: tournament.tournament_id,
                });
                continue;
            }

            let angler = totals.entry(entry.angler_id).or_default();

            if !angler.tournaments.insert(tournament.tournament_id) {
                issues.push(ResultIssue::DuplicateResult {
                    tournament_id: tournament.tournament_id,
                    angler_id: entry.angler_id,
                });
                continue;
            }

            angler.total_points += entry.points;
            angler.total_weight += entry.final_weight;
            angler.biggest_bass = angler.biggest_bass.max(entry.big_bass_weight);
        }
    }

    if !issues.is_empty() {
        return Err(ScoringError::Validation { issues });
    }

    let mut ranking: Vec<AnglerOfYearEntry> = totals
        .into_iter()
        .map(|(angler_id, t)| AnglerOfYearEntry {
            year,
            angler_id,
            total_points: t.total_points,
            tournaments_fished: u32::try_from(t.tournaments.len()).unwrap_or(u32::MAX),
            total_weight: t.total_weight,
            biggest_bass: t.biggest_bass,
            yearly_rank: 0,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.angler_id.cmp(&b.angler_id))
    });

    let mut rank = 0;
    let mut previous_points = None;
    for entry in &mut ranking {
        if previous_points != Some(entry.total_points) {
            rank += 1;
            previous_points = Some(entry.total_points);
        }
        entry.yearly_rank = rank;
    }

    debug!(
        "Computed {} Angler of the Year standings for {} anglers",
        year,
        ranking.len()
    );

    Ok(ranking)
}

/// Scores each tournament and aggregates the season in one pass, so the
/// points rules are only ever applied by [`calculate_standings`].
pub fn compute_angler_of_year(
    year: i32,
    tournaments: &[(Tournament, Vec<AnglerResult>)],
) -> Result<Vec<AnglerOfYearEntry>> {
    let standings = tournaments
        .iter()
        .filter(|(tournament, _)| tournament.counts_toward_aoy(year))
        .map(|(tournament, results)| calculate_standings(tournament, results))
        .collect::<Result<Vec<_>>>()?;

    aggregate_angler_of_year(year, &standings)
}
