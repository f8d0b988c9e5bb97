pub mod result;
pub mod team_result;
pub mod tournament;
