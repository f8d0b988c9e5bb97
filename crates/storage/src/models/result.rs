use rust_decimal::Decimal;
use scoring::models::AnglerResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResultRow {
    pub result_id: i32,
    pub tournament_id: i32,
    pub angler_id: i32,
    pub num_fish: i32,
    pub total_weight: Decimal,
    pub big_bass_weight: Decimal,
    pub dead_fish_penalty: Decimal,
    pub disqualified: bool,
    pub buy_in: bool,
    pub was_member: bool,
}

impl From<ResultRow> for AnglerResult {
    fn from(row: ResultRow) -> Self {
        Self {
            result_id: row.result_id,
            tournament_id: row.tournament_id,
            angler_id: row.angler_id,
            num_fish: row.num_fish,
            total_weight: row.total_weight,
            big_bass_weight: row.big_bass_weight,
            dead_fish_penalty: row.dead_fish_penalty,
            disqualified: row.disqualified,
            buy_in: row.buy_in,
            was_member: row.was_member,
        }
    }
}
