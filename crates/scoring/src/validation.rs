use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{Result, ResultIssue, ScoringError};
use crate::models::{AnglerResult, TeamResult, Tournament};

pub struct ResultValidator;

impl ResultValidator {
    /// Checks weigh-in rows before they are scored. Bad data from the admin
    /// layer is rejected with every offending record listed; suspicious but
    /// scoreable rows are reported as warnings.
    pub fn validate(tournament: &Tournament, results: &[AnglerResult]) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();
        let mut anglers = HashSet::new();

        for result in results {
            let tournament_id = result.tournament_id;
            let angler_id = result.angler_id;

            if tournament_id != tournament.tournament_id {
                report.errors.push(ResultIssue::UnknownTournament {
                    tournament_id,
                    angler_id,
                    expected: tournament.tournament_id,
                });
            }

            if !anglers.insert(angler_id) {
                report.errors.push(ResultIssue::DuplicateResult {
                    tournament_id,
                    angler_id,
                });
            }

            if result.num_fish < 0 {
                report.errors.push(ResultIssue::NegativeFishCount {
                    tournament_id,
                    angler_id,
                    num_fish: result.num_fish,
                });
            }

            for (field, value) in [
                ("total_weight", result.total_weight),
                ("big_bass_weight", result.big_bass_weight),
                ("dead_fish_penalty", result.dead_fish_penalty),
            ] {
                if value.is_sign_negative() && !value.is_zero() {
                    report.errors.push(ResultIssue::NegativeValue {
                        tournament_id,
                        angler_id,
                        field,
                        value,
                    });
                }
            }

            let label = format!("Tournament {}, angler {}", tournament_id, angler_id);

            if result.dead_fish_penalty > result.total_weight {
                report.warnings.push(format!(
                    "{}: dead fish penalty {} exceeds total weight {}, final weight clamped to 0",
                    label, result.dead_fish_penalty, result.total_weight
                ));
            }
            if result.big_bass_weight > result.total_weight {
                report.warnings.push(format!(
                    "{}: big bass {} is heavier than the whole bag {}",
                    label, result.big_bass_weight, result.total_weight
                ));
            }
            if (result.buy_in || result.disqualified) && result.total_weight > Decimal::ZERO {
                report.warnings.push(format!(
                    "{}: weight {} recorded on a buy-in or disqualified result is ignored",
                    label, result.total_weight
                ));
            }
            if result.num_fish > 0 && result.total_weight.is_zero() {
                report.warnings.push(format!(
                    "{}: {} fish recorded with no weight",
                    label, result.num_fish
                ));
            }
        }

        report.into_result()
    }

    pub fn validate_teams(tournament: &Tournament, teams: &[TeamResult]) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();
        let mut seen = HashSet::new();

        for team in teams {
            let tournament_id = team.tournament_id;
            let team_result_id = team.team_result_id;

            if tournament_id != tournament.tournament_id {
                report.errors.push(ResultIssue::UnknownTeamTournament {
                    tournament_id,
                    team_result_id,
                    expected: tournament.tournament_id,
                });
            }
            if !seen.insert(team_result_id) {
                report.errors.push(ResultIssue::DuplicateTeamResult {
                    tournament_id,
                    team_result_id,
                });
            }
            if team.total_weight.is_sign_negative() && !team.total_weight.is_zero() {
                report.errors.push(ResultIssue::NegativeTeamValue {
                    tournament_id,
                    team_result_id,
                    field: "total_weight",
                    value: team.total_weight,
                });
            }
            if team.num_fish < 0 {
                report.errors.push(ResultIssue::NegativeTeamValue {
                    tournament_id,
                    team_result_id,
                    field: "num_fish",
                    value: Decimal::from(team.num_fish),
                });
            }
            if team.angler2_id == Some(team.angler1_id) {
                report.warnings.push(format!(
                    "Tournament {}, team {}: angler {} listed twice in the same boat",
                    tournament_id, team_result_id, team.angler1_id
                ));
            }
        }

        report.into_result()
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ResultIssue>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }

    fn into_result(self) -> Result<Self> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(ScoringError::Validation {
                issues: self.errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn tournament() -> Tournament {
        Tournament {
            tournament_id: 7,
            event_id: 3,
            name: "Lake Dardanelle Open".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 11).unwrap(),
            year: 2024,
            complete: true,
            aoy_points: true,
            entry_fee: Decimal::from(25),
        }
    }

    fn result(angler_id: i32, total: Decimal) -> AnglerResult {
        AnglerResult {
            result_id: angler_id,
            tournament_id: 7,
            angler_id,
            num_fish: 3,
            total_weight: total,
            big_bass_weight: Decimal::ZERO,
            dead_fish_penalty: Decimal::ZERO,
            disqualified: false,
            buy_in: false,
            was_member: true,
        }
    }

    #[test]
    fn test_clean_results_pass() {
        let results = vec![
            result(1, Decimal::new(1050, 2)),
            result(2, Decimal::new(875, 2)),
        ];
        let report = ResultValidator::validate(&tournament(), &results).unwrap();
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_negative_weight_names_the_record() {
        let mut bad = result(9, Decimal::new(-100, 2));
        bad.dead_fish_penalty = Decimal::new(-25, 2);
        let err = ResultValidator::validate(&tournament(), &[bad]).unwrap_err();

        assert_eq!(
            err.issues(),
            &[
                ResultIssue::NegativeValue {
                    tournament_id: 7,
                    angler_id: 9,
                    field: "total_weight",
                    value: Decimal::new(-100, 2),
                },
                ResultIssue::NegativeValue {
                    tournament_id: 7,
                    angler_id: 9,
                    field: "dead_fish_penalty",
                    value: Decimal::new(-25, 2),
                },
            ]
        );
    }

    #[test]
    fn test_result_from_other_tournament_rejected() {
        let mut stray = result(4, Decimal::new(500, 2));
        stray.tournament_id = 99;
        let err = ResultValidator::validate(&tournament(), &[stray]).unwrap_err();
        assert_eq!(
            err.issues(),
            &[ResultIssue::UnknownTournament {
                tournament_id: 99,
                angler_id: 4,
                expected: 7,
            }]
        );
    }

    #[test]
    fn test_duplicate_angler_rejected() {
        let results = vec![result(5, Decimal::ONE), result(5, Decimal::from(2))];
        let err = ResultValidator::validate(&tournament(), &results).unwrap_err();
        assert_eq!(
            err.issues(),
            &[ResultIssue::DuplicateResult {
                tournament_id: 7,
                angler_id: 5,
            }]
        );
    }

    #[test]
    fn test_negative_fish_count_rejected() {
        let mut bad = result(3, Decimal::ONE);
        bad.num_fish = -1;
        let err = ResultValidator::validate(&tournament(), &[bad]).unwrap_err();
        assert!(matches!(
            err.issues()[0],
            ResultIssue::NegativeFishCount { angler_id: 3, num_fish: -1, .. }
        ));
    }

    #[test]
    fn test_oversized_penalty_is_a_warning() {
        let mut r = result(1, Decimal::new(200, 2));
        r.dead_fish_penalty = Decimal::new(250, 2);
        let report = ResultValidator::validate(&tournament(), &[r]).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("clamped to 0"));
    }

    #[test]
    fn test_team_validation() {
        let teams = vec![
            TeamResult {
                team_result_id: 1,
                tournament_id: 7,
                angler1_id: 1,
                angler2_id: Some(2),
                num_fish: 10,
                total_weight: Decimal::new(2210, 2),
            },
            TeamResult {
                team_result_id: 2,
                tournament_id: 7,
                angler1_id: 3,
                angler2_id: None,
                num_fish: 0,
                total_weight: Decimal::new(-1, 0),
            },
        ];
        let err = ResultValidator::validate_teams(&tournament(), &teams).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert!(err.to_string().contains("team 2: negative total_weight"));
    }
}
