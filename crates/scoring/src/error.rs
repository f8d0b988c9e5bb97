use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Validation failed with {} error(s): {}", .issues.len(), join_issues(.issues))]
    Validation { issues: Vec<ResultIssue> },

    #[error("Entry fee must be positive, got {0}")]
    InvalidEntryFee(Decimal),

    #[error("Tournament {0} was supplied more than once")]
    DuplicateTournament(i32),

    #[error("Payout for {anglers} anglers at {entry_fee} is too large to compute")]
    PayoutOverflow { entry_fee: Decimal, anglers: u32 },
}

/// A single rejected input row. Every variant names the tournament and the
/// angler (or team) it came from so the admin layer can point at the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultIssue {
    #[error("tournament {tournament_id}, angler {angler_id}: negative {field} ({value})")]
    NegativeValue {
        tournament_id: i32,
        angler_id: i32,
        field: &'static str,
        value: Decimal,
    },

    #[error("tournament {tournament_id}, angler {angler_id}: negative fish count ({num_fish})")]
    NegativeFishCount {
        tournament_id: i32,
        angler_id: i32,
        num_fish: i32,
    },

    #[error(
        "angler {angler_id}: result references tournament {tournament_id}, expected tournament {expected}"
    )]
    UnknownTournament {
        tournament_id: i32,
        angler_id: i32,
        expected: i32,
    },

    #[error("tournament {tournament_id}, angler {angler_id}: more than one result")]
    DuplicateResult { tournament_id: i32, angler_id: i32 },

    #[error("tournament {tournament_id}, team {team_result_id}: negative {field} ({value})")]
    NegativeTeamValue {
        tournament_id: i32,
        team_result_id: i32,
        field: &'static str,
        value: Decimal,
    },

    #[error(
        "team {team_result_id}: result references tournament {tournament_id}, expected tournament {expected}"
    )]
    UnknownTeamTournament {
        tournament_id: i32,
        team_result_id: i32,
        expected: i32,
    },

    #[error("tournament {tournament_id}, team {team_result_id}: more than one result")]
    DuplicateTeamResult {
        tournament_id: i32,
        team_result_id: i32,
    },
}

impl ScoringError {
    /// True when the error was caused by bad input rows rather than a bad call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::Validation { .. })
    }

    pub fn issues(&self) -> &[ResultIssue] {
        match self {
            ScoringError::Validation { issues } => issues,
            _ => &[],
        }
    }
}

fn join_issues(issues: &[ResultIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_issue() {
        let err = ScoringError::Validation {
            issues: vec![
                ResultIssue::DuplicateResult {
                    tournament_id: 4,
                    angler_id: 12,
                },
                ResultIssue::NegativeValue {
                    tournament_id: 4,
                    angler_id: 15,
                    field: "total_weight",
                    value: Decimal::new(-150, 2),
                },
            ],
        };

        let message = err.to_string();
        assert!(message.starts_with("Validation failed with 2 error(s)"));
        assert!(message.contains("tournament 4, angler 12: more than one result"));
        assert!(message.contains("angler 15: negative total_weight (-1.50)"));
        assert!(err.is_validation());
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_entry_fee_error_has_no_issues() {
        let err = ScoringError::InvalidEntryFee(Decimal::ZERO);
        assert!(!err.is_validation());
        assert!(err.issues().is_empty());
    }

    #[test]
    fn test_payout_overflow_message() {
        let err = ScoringError::PayoutOverflow {
            entry_fee: Decimal::from(25),
            anglers: 500,
        };
        assert_eq!(
            err.to_string(),
            "Payout for 500 anglers at 25 is too large to compute"
        );
        assert!(!err.is_validation());
    }
}
