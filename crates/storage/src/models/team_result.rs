use rust_decimal::Decimal;
use scoring::models::TeamResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamResultRow {
    pub team_result_id: i32,
    pub tournament_id: i32,
    pub angler1_id: i32,
    pub angler2_id: Option<i32>,
    pub num_fish: i32,
    pub total_weight: Decimal,
}

impl From<TeamResultRow> for TeamResult {
    fn from(row: TeamResultRow) -> Self {
        Self {
            team_result_id: row.team_result_id,
            tournament_id: row.tournament_id,
            angler1_id: row.angler1_id,
            angler2_id: row.angler2_id,
            num_fish: row.num_fish,
            total_weight: row.total_weight,
        }
    }
}
