use tracing::debug;

use crate::error::Result;
use crate::models::{TeamResult, TeamStanding, Tournament};
use crate::validation::ResultValidator;

/// Boats ranked by weight, heaviest first. Equal weights keep entry order,
/// so every team gets its own place.
pub fn rank_teams(tournament: &Tournament, teams: &[TeamResult]) -> Result<Vec<TeamStanding>> {
    let report = ResultValidator::validate_teams(tournament, teams)?;
    report.log_warnings();

    if !tournament.complete {
        return Ok(Vec::new());
    }

    let mut ordered: Vec<&TeamResult> = teams.iter().collect();
    ordered.sort_by(|a, b| {
        b.total_weight
            .cmp(&a.total_weight)
            .then_with(|| a.team_result_id.cmp(&b.team_result_id))
    });

    let standings: Vec<TeamStanding> = ordered
        .into_iter()
        .zip(1..)
        .map(|(team, place_finish)| TeamStanding {
            team_result_id: team.team_result_id,
            angler1_id: team.angler1_id,
            angler2_id: team.angler2_id,
            place_finish,
            num_fish: team.num_fish,
            total_weight: team.total_weight,
        })
        .collect();

    debug!(
        "Ranked {} teams for tournament {}",
        standings.len(),
        tournament.tournament_id
    );

    Ok(standings)
}
