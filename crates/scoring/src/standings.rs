//! Per-tournament placements and points.
//!
//! Anglers who weighed fish are dense-ranked by final weight and score
//! `101 - rank`. Below them come zero weights, then buy-ins, then
//! disqualifications; the first two score a fixed penalty under the last
//! weighed place and disqualified anglers score nothing.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::Result;
use crate::models::{
    AnglerResult, BigBassAward, FinishStatus, StandingEntry, Tournament, TournamentStandings,
};
use crate::rules::{
    BUY_IN_PENALTY, MAX_POINTS, POINTS_BASE, ZERO_WEIGHT_PENALTY, big_bass_minimum,
};
use crate::validation::ResultValidator;

pub fn calculate_standings(
    tournament: &Tournament,
    results: &[AnglerResult],
) -> Result<TournamentStandings> {
    let report = ResultValidator::validate(tournament, results)?;
    report.log_warnings();

    if !tournament.complete {
        debug!(
            "Tournament {} is not complete, no standings",
            tournament.tournament_id
        );
        return Ok(TournamentStandings {
            tournament: tournament.clone(),
            entries: Vec::new(),
        });
    }

    let mut eligible: Vec<&AnglerResult> = results.iter().filter(|r| r.was_member).collect();
    eligible.sort_by(|a, b| {
        a.status()
            .cmp(&b.status())
            .then_with(|| b.ranking_weight().cmp(&a.ranking_weight()))
            .then_with(|| a.angler_id.cmp(&b.angler_id))
    });

    let weighed = eligible
        .iter()
        .filter(|r| r.status() == FinishStatus::Weighed)
        .count();
    let weighed = i32::try_from(weighed).unwrap_or(i32::MAX);

    let mut entries = Vec::with_capacity(eligible.len());
    let mut place = 0;
    let mut previous: Option<(FinishStatus, Decimal)> = None;

    for result in eligible {
        let status = result.status();
        let key = (status, result.ranking_weight());
        if previous != Some(key) {
            place += 1;
            previous = Some(key);
        }

        let counted = matches!(status, FinishStatus::Weighed | FinishStatus::ZeroWeight);

        entries.push(StandingEntry {
            tournament_id: tournament.tournament_id,
            angler_id: result.angler_id,
            place,
            points: points_for(status, place, weighed),
            status,
            num_fish: if counted { result.num_fish } else { 0 },
            final_weight: result.ranking_weight(),
            big_bass_weight: if counted {
                result.big_bass_weight
            } else {
                Decimal::ZERO
            },
        });
    }

    debug!(
        "Computed standings for tournament {}: {} anglers, {} weighed fish",
        tournament.tournament_id,
        entries.len(),
        weighed
    );

    Ok(TournamentStandings {
        tournament: tournament.clone(),
        entries,
    })
}

/// Points for a finish. `rank` is the dense weight rank and only matters for
/// weighed results; `weighed` is the number of anglers who weighed fish.
/// When nobody weighed fish there is no last weighed place to score against
/// and every finish is worth 0.
pub fn points_for(status: FinishStatus, rank: i32, weighed: i32) -> i32 {
    if weighed == 0 {
        return 0;
    }

    let last_weighed = POINTS_BASE.saturating_sub(weighed);
    let points = match status {
        FinishStatus::Weighed => POINTS_BASE.saturating_sub(rank),
        FinishStatus::ZeroWeight => last_weighed.saturating_sub(ZERO_WEIGHT_PENALTY),
        FinishStatus::BuyIn => last_weighed.saturating_sub(BUY_IN_PENALTY),
        FinishStatus::Disqualified => 0,
    };

    points.clamp(0, MAX_POINTS)
}

/// Heaviest single fish at or above the club minimum. Returns `None` when
/// no fish qualifies and the pot carries over.
pub fn big_bass_award(standings: &TournamentStandings) -> Option<BigBassAward> {
    let heaviest = standings
        .entries
        .iter()
        .map(|e| e.big_bass_weight)
        .max()?;

    if heaviest < big_bass_minimum() {
        return None;
    }

    let mut angler_ids: Vec<i32> = standings
        .entries
        .iter()
        .filter(|e| e.big_bass_weight == heaviest)
        .map(|e| e.angler_id)
        .collect();
    angler_ids.sort_unstable();

    Some(BigBassAward {
        weight: heaviest,
        angler_ids,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn tournament() -> Tournament {
        Tournament {
            tournament_id: 1,
            event_id: 1,
            name: "Beaver Lake".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 13).unwrap(),
            year: 2024,
            complete: true,
            aoy_points: true,
            entry_fee: Decimal::from(25),
        }
    }

    fn weighed(angler_id: i32, pounds: Decimal) -> AnglerResult {
        AnglerResult {
            result_id: angler_id,
            tournament_id: 1,
            angler_id,
            num_fish: 5,
            total_weight: pounds,
            big_bass_weight: Decimal::ZERO,
            dead_fish_penalty: Decimal::ZERO,
            disqualified: false,
            buy_in: false,
            was_member: true,
        }
    }

    fn zero(angler_id: i32) -> AnglerResult {
        AnglerResult {
            num_fish: 0,
            ..weighed(angler_id, Decimal::ZERO)
        }
    }

    fn buy_in(angler_id: i32) -> AnglerResult {
        AnglerResult {
            buy_in: true,
            ..zero(angler_id)
        }
    }

    fn disqualified(angler_id: i32, pounds: Decimal) -> AnglerResult {
        AnglerResult {
            disqualified: true,
            ..weighed(angler_id, pounds)
        }
    }

    fn lbs(hundredths: i64) -> Decimal {
        Decimal::new(hundredths, 2)
    }

    fn places_and_points(standings: &TournamentStandings) -> Vec<(i32, i32, i32)> {
        standings
            .entries
            .iter()
            .map(|e| (e.angler_id, e.place, e.points))
            .collect()
    }

    #[test]
    fn test_tied_leaders_share_first_place() {
        let results = vec![
            weighed(1, lbs(1000)),
            weighed(2, lbs(1000)),
            weighed(3, lbs(500)),
        ];
        let standings = calculate_standings(&tournament(), &results).unwrap();
        assert_eq!(
            places_and_points(&standings),
            vec![(1, 1, 100), (2, 1, 100), (3, 2, 99)]
        );
    }

    #[test]
    fn test_buy_in_scores_four_below_last_weighed_place() {
        let results = vec![weighed(1, lbs(800)), buy_in(2)];
        let standings = calculate_standings(&tournament(), &results).unwrap();
        assert_eq!(places_and_points(&standings), vec![(1, 1, 100), (2, 2, 96)]);
        assert_eq!(standings.entries[1].status, FinishStatus::BuyIn);
    }

    #[test]
    fn test_lone_disqualified_angler_scores_zero() {
        let results = vec![disqualified(1, lbs(1500))];
        let standings = calculate_standings(&tournament(), &results).unwrap();
        assert_eq!(places_and_points(&standings), vec![(1, 1, 0)]);
        assert_eq!(standings.entries[0].final_weight, Decimal::ZERO);
    }

    #[test]
    fn test_tiers_order_catches_zeros_buy_ins_then_disqualified() {
        let results = vec![
            disqualified(10, lbs(2500)),
            buy_in(11),
            zero(12),
            weighed(13, lbs(420)),
            zero(14),
            weighed(15, lbs(1110)),
            buy_in(16),
        ];
        let standings = calculate_standings(&tournament(), &results).unwrap();

        // N = 2: zero weights score 101 - 2 - 2, buy-ins 101 - 2 - 4.
        assert_eq!(
            places_and_points(&standings),
            vec![
                (15, 1, 100),
                (13, 2, 99),
                (12, 3, 97),
                (14, 3, 97),
                (11, 4, 95),
                (16, 4, 95),
                (10, 5, 0),
            ]
        );
    }

    #[test]
    fn test_penalty_applies_before_ranking() {
        let mut penalized = weighed(1, lbs(1200));
        penalized.dead_fish_penalty = lbs(300);
        let results = vec![penalized, weighed(2, lbs(1000))];
        let standings = calculate_standings(&tournament(), &results).unwrap();

        assert_eq!(places_and_points(&standings), vec![(2, 1, 100), (1, 2, 99)]);
        assert_eq!(standings.entries[1].final_weight, lbs(900));
    }

    #[test]
    fn test_penalty_that_wipes_out_the_bag_counts_as_zero_weight() {
        let mut wiped = weighed(1, lbs(150));
        wiped.dead_fish_penalty = lbs(200);
        let results = vec![wiped, weighed(2, lbs(600))];
        let standings = calculate_standings(&tournament(), &results).unwrap();

        let entry = standings.entry_for(1).unwrap();
        assert_eq!(entry.status, FinishStatus::ZeroWeight);
        assert_eq!(entry.final_weight, Decimal::ZERO);
        assert_eq!(entry.points, 98);
    }

    #[test]
    fn test_nobody_weighed_collapses_points_to_zero() {
        let results = vec![zero(1), buy_in(2), disqualified(3, lbs(0))];
        let standings = calculate_standings(&tournament(), &results).unwrap();
        assert!(standings.entries.iter().all(|e| e.points == 0));
        assert_eq!(
            places_and_points(&standings),
            vec![(1, 1, 0), (2, 2, 0), (3, 3, 0)]
        );
    }

    #[test]
    fn test_guests_are_excluded() {
        let mut guest = weighed(2, lbs(2000));
        guest.was_member = false;
        let results = vec![weighed(1, lbs(900)), guest];
        let standings = calculate_standings(&tournament(), &results).unwrap();
        assert_eq!(places_and_points(&standings), vec![(1, 1, 100)]);
    }

    #[test]
    fn test_incomplete_tournament_has_no_standings() {
        let mut open = tournament();
        open.complete = false;
        let standings = calculate_standings(&open, &[weighed(1, lbs(900))]).unwrap();
        assert!(standings.is_empty());
    }

    #[test]
    fn test_empty_field_is_not_an_error() {
        let standings = calculate_standings(&tournament(), &[]).unwrap();
        assert!(standings.is_empty());
        assert_eq!(standings.summary().anglers, 0);
    }

    #[test]
    fn test_invalid_rows_are_rejected() {
        let bad = weighed(4, lbs(-10));
        let err = calculate_standings(&tournament(), &[weighed(1, lbs(100)), bad]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("angler 4"));
    }

    #[test]
    fn test_points_floor_at_zero_in_large_fields() {
        assert_eq!(points_for(FinishStatus::Weighed, 101, 120), 0);
        assert_eq!(points_for(FinishStatus::ZeroWeight, 0, 100), 0);
        assert_eq!(points_for(FinishStatus::BuyIn, 0, 98), 0);
        assert_eq!(points_for(FinishStatus::ZeroWeight, 0, 98), 1);
    }

    #[test]
    fn test_invariants_hold_across_field_sizes() {
        // Deterministic pseudo-random fields.
        let mut seed: u64 = 0x5eed;
        let mut next = move |modulo: u64| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) % modulo
        };

        for field_size in 1..=60 {
            let results: Vec<AnglerResult> = (1..=field_size)
                .map(|angler_id| match next(10) {
                    0 => disqualified(angler_id, lbs(next(2000) as i64)),
                    1 => buy_in(angler_id),
                    2 => zero(angler_id),
                    _ => weighed(angler_id, lbs(next(40) as i64 * 50 + 50)),
                })
                .collect();

            let standings = calculate_standings(&tournament(), &results).unwrap();
            let again = calculate_standings(&tournament(), &results).unwrap();
            assert_eq!(standings, again);

            let weighed_count = standings
                .entries
                .iter()
                .filter(|e| e.status == FinishStatus::Weighed)
                .count() as i32;

            for entry in &standings.entries {
                assert!((0..=MAX_POINTS).contains(&entry.points));
                if entry.status == FinishStatus::Disqualified {
                    assert_eq!(entry.points, 0);
                }
            }

            let zero_points = points_for(FinishStatus::ZeroWeight, 0, weighed_count);
            let buy_in_points = points_for(FinishStatus::BuyIn, 0, weighed_count);
            assert!(buy_in_points <= zero_points);

            if let Some(top) = standings.entries.first()
                && top.status == FinishStatus::Weighed
            {
                assert_eq!(top.points, MAX_POINTS);
                for entry in &standings.entries {
                    assert_eq!(
                        entry.points == MAX_POINTS,
                        entry.final_weight == top.final_weight
                    );
                }
            }

            let places: Vec<i32> = standings.entries.iter().map(|e| e.place).collect();
            assert!(places.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_summary_counts_each_tier() {
        let mut big = weighed(1, lbs(1520));
        big.num_fish = 5;
        let results = vec![
            big,
            weighed(2, lbs(610)),
            zero(3),
            buy_in(4),
            disqualified(5, lbs(900)),
        ];
        let summary = calculate_standings(&tournament(), &results)
            .unwrap()
            .summary();

        assert_eq!(summary.anglers, 5);
        assert_eq!(summary.anglers_weighed, 2);
        assert_eq!(summary.zero_weights, 1);
        assert_eq!(summary.buy_ins, 1);
        assert_eq!(summary.disqualified, 1);
        assert_eq!(summary.total_fish, 10);
        assert_eq!(summary.total_weight, lbs(2130));
        assert_eq!(summary.heaviest_bag, lbs(1520));
    }

    #[test]
    fn test_big_bass_award_requires_minimum() {
        let mut small = weighed(1, lbs(900));
        small.big_bass_weight = lbs(450);
        let standings = calculate_standings(&tournament(), &[small]).unwrap();
        assert_eq!(big_bass_award(&standings), None);
    }

    #[test]
    fn test_big_bass_award_ties_and_ignores_disqualified() {
        let mut a = weighed(3, lbs(1500));
        a.big_bass_weight = lbs(612);
        let mut b = weighed(1, lbs(1100));
        b.big_bass_weight = lbs(612);
        let mut cheater = disqualified(2, lbs(2000));
        cheater.big_bass_weight = lbs(800);

        let standings = calculate_standings(&tournament(), &[a, b, cheater]).unwrap();
        assert_eq!(
            big_bass_award(&standings),
            Some(BigBassAward {
                weight: lbs(612),
                angler_ids: vec![1, 3],
            })
        );
    }
}
