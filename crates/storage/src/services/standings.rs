//! Loads weigh-ins and hands them to the scoring engine. Nothing here ranks
//! or scores on its own.

use scoring::models::{AnglerResult, Tournament};
use sqlx::PgPool;
use tracing::info;

use crate::dto::angler_of_year::{AnglerOfYearEntryResponse, AnglerOfYearResponse};
use crate::dto::payout::{PayoutPreviewQuery, PayoutResponse};
use crate::dto::standings::{
    BigBassResponse, StandingEntryResponse, TeamStandingResponse, TournamentInfo,
    TournamentStandingsResponse, TournamentSummaryResponse,
};
use crate::error::Result;
use crate::repository::result::ResultRepository;
use crate::repository::team_result::TeamResultRepository;
use crate::repository::tournament::TournamentRepository;

pub async fn tournament_standings(
    pool: &PgPool,
    tournament_id: i32,
) -> Result<TournamentStandingsResponse> {
    let tournament = TournamentRepository::new(pool)
        .find_by_id(tournament_id)
        .await?;
    let results = ResultRepository::new(pool)
        .list_for_tournament(tournament_id)
        .await?;
    let teams = TeamResultRepository::new(pool)
        .list_for_tournament(tournament_id)
        .await?;

    let standings = scoring::calculate_standings(&tournament, &results)?;
    let team_standings = scoring::rank_teams(&tournament, &teams)?;
    let big_bass = scoring::big_bass_award(&standings);

    Ok(TournamentStandingsResponse {
        tournament: TournamentInfo::from(&tournament),
        summary: TournamentSummaryResponse::from(standings.summary()),
        standings: standings
            .entries
            .iter()
            .map(StandingEntryResponse::from)
            .collect(),
        big_bass: big_bass.map(BigBassResponse::from),
        teams: team_standings
            .into_iter()
            .map(TeamStandingResponse::from)
            .collect(),
    })
}

pub async fn angler_of_year(pool: &PgPool, year: i32) -> Result<AnglerOfYearResponse> {
    let tournaments: Vec<Tournament> = TournamentRepository::new(pool)
        .list_for_year(year)
        .await?
        .into_iter()
        .filter(|t| t.counts_toward_aoy(year))
        .collect();

    let tournament_ids: Vec<i32> = tournaments.iter().map(|t| t.tournament_id).collect();
    let mut results = ResultRepository::new(pool)
        .list_for_tournaments(&tournament_ids)
        .await?;

    let season: Vec<(Tournament, Vec<AnglerResult>)> = tournaments
        .into_iter()
        .map(|t| {
            let rows = results.remove(&t.tournament_id).unwrap_or_default();
            (t, rows)
        })
        .collect();

    let ranking = scoring::compute_angler_of_year(year, &season)?;

    info!(
        "Angler of the Year {}: {} tournaments, {} anglers",
        year,
        season.len(),
        ranking.len()
    );

    Ok(AnglerOfYearResponse {
        year,
        tournaments_counted: season.len(),
        entries: ranking
            .into_iter()
            .map(AnglerOfYearEntryResponse::from)
            .collect(),
    })
}

pub async fn tournament_payout(pool: &PgPool, tournament_id: i32) -> Result<PayoutResponse> {
    let tournament = TournamentRepository::new(pool)
        .find_by_id(tournament_id)
        .await?;
    let results = ResultRepository::new(pool)
        .list_for_tournament(tournament_id)
        .await?;

    let payout = scoring::tournament_payout(&tournament, &results)?;
    Ok(payout.into())
}

pub fn payout_preview(query: &PayoutPreviewQuery) -> Result<PayoutResponse> {
    let payout = scoring::calculate_payout(query.entry_fee, query.anglers)?;
    Ok(payout.into())
}
