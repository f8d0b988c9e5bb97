//! Club by-laws. Changing a rule is a one-line edit here.

use rust_decimal::Decimal;

/// Points for first place.
pub const MAX_POINTS: i32 = 100;

/// Points for rank `r` with a catch are `POINTS_BASE - r`.
pub const POINTS_BASE: i32 = 101;

/// Points below the last weighed place for an angler who weighed nothing.
pub const ZERO_WEIGHT_PENALTY: i32 = 2;

/// Points below the last weighed place for an angler who bought in without fishing.
pub const BUY_IN_PENALTY: i32 = 4;

/// Smallest fish, in hundredths of a pound, that can win the big-bass pot.
pub const BIG_BASS_MINIMUM_HUNDREDTHS: i64 = 500;

/// Entry fee the share amounts below are quoted against, in dollars.
pub const BASELINE_ENTRY_FEE: u32 = 25;

pub const POT_SHARE: u32 = 16;
pub const BIG_BASS_SHARE: u32 = 4;
pub const CLUB_SHARE: u32 = 3;
pub const CHARITY_SHARE: u32 = 2;

/// Money is settled to the cent.
pub const CURRENCY_SCALE: u32 = 2;

pub fn big_bass_minimum() -> Decimal {
    Decimal::new(BIG_BASS_MINIMUM_HUNDREDTHS, 2)
}
