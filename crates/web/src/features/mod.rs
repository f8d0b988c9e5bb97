pub mod angler_of_year;
pub mod payouts;
pub mod tournaments;
