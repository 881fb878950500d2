//! Pre-built test data for common scenarios
//!
//! The values mirror the observed deployment: 20 rooms at 0.075 native
//! units per day.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use core_kernel::{Currency, Money};

/// A fixed check-in instant shared by tests that never touch real time
pub static CHECK_IN: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

/// Money fixtures in the default settlement currency
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The deployed initial per-day rate: 0.075 ETH
    pub fn nightly_rate() -> Money {
        Money::from_base_units(75_000_000_000_000_000, Currency::Eth)
            .expect("fixture rate is representable")
    }

    /// The exact charge for a stay of `days` at the initial rate
    pub fn charge(days: u32) -> Money {
        Self::nightly_rate()
            .checked_mul(days)
            .expect("fixture charge is representable")
    }

    /// An amount that matches no whole-day charge at the initial rate
    pub fn wrong_amount() -> Money {
        Money::from_base_units(1_400_000_000_000_000, Currency::Eth)
            .expect("fixture amount is representable")
    }
}

/// Temporal fixtures around the shared check-in instant
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The shared check-in instant
    pub fn check_in() -> DateTime<Utc> {
        *CHECK_IN
    }

    /// An instant `days` whole days after check-in
    pub fn days_after_check_in(days: i64) -> DateTime<Utc> {
        *CHECK_IN + chrono::Duration::days(days)
    }
}
