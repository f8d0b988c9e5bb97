mod angler_of_year;
mod angler_result;
mod payout;
mod standing;
mod team_result;
mod tournament;

pub use angler_of_year::AnglerOfYearEntry;
pub use angler_result::{AnglerResult, FinishStatus};
pub use payout::Payout;
pub use standing::{BigBassAward, StandingEntry, TournamentStandings, TournamentSummary};
pub use team_result::{TeamResult, TeamStanding};
pub use tournament::Tournament;
