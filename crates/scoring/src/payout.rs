use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{Result, ScoringError};
use crate::models::{AnglerResult, Payout, Tournament};
use crate::rules::{
    BASELINE_ENTRY_FEE, BIG_BASS_SHARE, CHARITY_SHARE, CLUB_SHARE, CURRENCY_SCALE,
};
use crate::validation::ResultValidator;

/// Splits `entry_fee * anglers` into pot, big bass, club and charity in the
/// 16:4:3:2 ratio of the baseline fee. The three smaller shares are cut down
/// to the cent and the pot absorbs whatever is left, so the shares always
/// add up to the amount collected.
pub fn calculate_payout(entry_fee: Decimal, anglers: u32) -> Result<Payout> {
    if entry_fee <= Decimal::ZERO {
        return Err(ScoringError::InvalidEntryFee(entry_fee));
    }

    let overflow = || ScoringError::PayoutOverflow { entry_fee, anglers };
    let total = entry_fee
        .checked_mul(Decimal::from(anglers))
        .ok_or_else(overflow)?;
    let baseline = Decimal::from(BASELINE_ENTRY_FEE);
    let share = |parts: u32| {
        total
            .checked_mul(Decimal::from(parts))
            .and_then(|amount| amount.checked_div(baseline))
            .map(|amount| {
                amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::ToZero)
            })
            .ok_or_else(overflow)
    };

    let big_bass = share(BIG_BASS_SHARE)?;
    let club = share(CLUB_SHARE)?;
    let charity = share(CHARITY_SHARE)?;
    let pot = total - big_bass - club - charity;

    debug!(
        "Payout for {} anglers at {}: pot {}, big bass {}, club {}, charity {}",
        anglers,
        entry_fee,
        pot,
        big_bass,
        club,
        charity
    );

    Ok(Payout {
        entry_fee,
        anglers,
        total,
        pot,
        big_bass,
        club,
        charity,
    })
}

/// Payout for a tournament. Every result row is a paid entry: guests,
/// buy-ins and disqualified anglers all paid the fee.
pub fn tournament_payout(tournament: &Tournament, results: &[AnglerResult]) -> Result<Payout> {
    ResultValidator::validate(tournament, results)?;

    let anglers = u32::try_from(results.len()).unwrap_or(u32::MAX);
    calculate_payout(tournament.entry_fee, anglers)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn dollars(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_thirty_dollar_fee_with_twenty_anglers() {
        let payout = calculate_payout(Decimal::from(30), 20).unwrap();

        assert_eq!(payout.total, Decimal::from(600));
        assert_eq!(payout.pot, Decimal::from(384));
        assert_eq!(payout.big_bass, Decimal::from(96));
        assert_eq!(payout.club, Decimal::from(72));
        assert_eq!(payout.charity, Decimal::from(48));
        assert_eq!(payout.shares_total(), payout.total);
    }

    #[test]
    fn test_baseline_fee_pays_whole_dollar_shares() {
        let payout = calculate_payout(Decimal::from(25), 1).unwrap();
        assert_eq!(
            (payout.pot, payout.big_bass, payout.club, payout.charity),
            (
                Decimal::from(16),
                Decimal::from(4),
                Decimal::from(3),
                Decimal::from(2)
            )
        );
    }

    #[test]
    fn test_rounding_remainder_goes_to_the_pot() {
        // $33.33 x 3 = $99.99; 4/25 = 15.9984, 3/25 = 11.9988, 2/25 = 7.9992.
        let payout = calculate_payout(dollars(3333), 3).unwrap();

        assert_eq!(payout.big_bass, dollars(1599));
        assert_eq!(payout.club, dollars(1199));
        assert_eq!(payout.charity, dollars(799));
        assert_eq!(payout.pot, dollars(6402));
        assert_eq!(payout.shares_total(), dollars(9999));
    }

    #[test]
    fn test_shares_always_sum_to_total() {
        let fees = [1, 733, 1250, 2500, 3000, 3333, 4000, 9999, 10001];
        for cents in fees {
            for anglers in 0..=75 {
                let payout = calculate_payout(dollars(cents), anglers).unwrap();
                assert_eq!(payout.shares_total(), payout.total);
                assert_eq!(payout.total, dollars(cents) * Decimal::from(anglers));
                assert!(payout.pot >= payout.big_bass);
                assert!(payout.big_bass >= payout.club);
                assert!(payout.club >= payout.charity);
                assert!(payout.charity >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_zero_anglers_pays_nothing() {
        let payout = calculate_payout(Decimal::from(25), 0).unwrap();
        assert_eq!(payout.total, Decimal::ZERO);
        assert_eq!(payout.pot, Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_fee_rejected() {
        assert!(matches!(
            calculate_payout(Decimal::ZERO, 10),
            Err(ScoringError::InvalidEntryFee(_))
        ));
        assert!(matches!(
            calculate_payout(dollars(-2500), 10),
            Err(ScoringError::InvalidEntryFee(_))
        ));
    }

    #[test]
    fn test_oversized_fee_is_rejected_instead_of_overflowing() {
        let fee: Decimal = "100000000000000000000000000".parse().unwrap();

        assert!(matches!(
            calculate_payout(fee, 500),
            Err(ScoringError::PayoutOverflow { anglers: 500, .. })
        ));
        assert!(matches!(
            calculate_payout(Decimal::MAX, 2),
            Err(ScoringError::PayoutOverflow { .. })
        ));
        assert!(calculate_payout(fee, 1).is_ok());
    }

    #[test]
    fn test_tournament_payout_counts_every_entry() {
        let tournament = Tournament {
            tournament_id: 5,
            event_id: 5,
            name: "Bull Shoals".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
            year: 2024,
            complete: true,
            aoy_points: true,
            entry_fee: Decimal::from(25),
        };
        let results: Vec<AnglerResult> = (1..=4)
            .map(|angler_id| AnglerResult {
                result_id: angler_id,
                tournament_id: 5,
                angler_id,
                num_fish: 0,
                total_weight: Decimal::ZERO,
                big_bass_weight: Decimal::ZERO,
                dead_fish_penalty: Decimal::ZERO,
                disqualified: angler_id == 2,
                buy_in: angler_id == 3,
                was_member: angler_id != 4,
            })
            .collect();

        let payout = tournament_payout(&tournament, &results).unwrap();
        assert_eq!(payout.anglers, 4);
        assert_eq!(payout.total, Decimal::from(100));
        assert_eq!(payout.pot, Decimal::from(64));
    }
}
