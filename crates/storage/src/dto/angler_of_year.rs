use rust_decimal::Decimal;
use scoring::models::AnglerOfYearEntry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnglerOfYearEntryResponse {
    pub yearly_rank: i32,
    pub angler_id: i32,
    pub total_points: i32,
    pub tournaments_fished: u32,
    pub average_points: Decimal,
    pub total_weight: Decimal,
    pub biggest_bass: Decimal,
}

impl From<AnglerOfYearEntry> for AnglerOfYearEntryResponse {
    fn from(entry: AnglerOfYearEntry) -> Self {
        Self {
            average_points: entry.average_points(),
            yearly_rank: entry.yearly_rank,
            angler_id: entry.angler_id,
            total_points: entry.total_points,
            tournaments_fished: entry.tournaments_fished,
            total_weight: entry.total_weight,
            biggest_bass: entry.biggest_bass,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnglerOfYearResponse {
    pub year: i32,
    /// Complete tournaments with AoY points that fed the ranking
    pub tournaments_counted: usize,
    pub entries: Vec<AnglerOfYearEntryResponse>,
}

/// Years accepted by the season endpoints
pub const MIN_SEASON_YEAR: i32 = 1990;
pub const MAX_SEASON_YEAR: i32 = 2100;

pub fn validate_year(year: i32) -> Result<(), String> {
    if !(MIN_SEASON_YEAR..=MAX_SEASON_YEAR).contains(&year) {
        return Err(format!(
            "year must be between {} and {}",
            MIN_SEASON_YEAR, MAX_SEASON_YEAR
        ));
    }
    Ok(())
}
