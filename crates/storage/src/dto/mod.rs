pub mod angler_of_year;
pub mod payout;
pub mod standings;
