use chrono::NaiveDate;
use rust_decimal::Decimal;
use scoring::models::Tournament;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tournament joined with the date and year of its event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TournamentRow {
    pub tournament_id: i32,
    pub event_id: i32,
    pub name: String,
    pub event_date: NaiveDate,
    pub year: i32,
    pub complete: bool,
    pub aoy_points: bool,
    pub entry_fee: Decimal,
}

impl From<TournamentRow> for Tournament {
    fn from(row: TournamentRow) -> Self {
        Self {
            tournament_id: row.tournament_id,
            event_id: row.event_id,
            name: row.name,
            date: row.event_date,
            year: row.year,
            complete: row.complete,
            aoy_points: row.aoy_points,
            entry_fee: row.entry_fee,
        }
    }
}
