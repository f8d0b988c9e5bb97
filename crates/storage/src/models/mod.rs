mod result;
mod team_result;
mod tournament;

pub use result::ResultRow;
pub use team_result::TeamResultRow;
pub use tournament::TournamentRow;
