pub mod error;
pub mod models;
pub mod payout;
pub mod rules;
pub mod season;
pub mod standings;
pub mod teams;
pub mod validation;

pub use error::{Result, ResultIssue, ScoringError};
pub use payout::{calculate_payout, tournament_payout};
pub use season::{aggregate_angler_of_year, compute_angler_of_year};
pub use standings::{big_bass_award, calculate_standings, points_for};
pub use teams::rank_teams;
pub use validation::{ResultValidator, ValidationReport};
