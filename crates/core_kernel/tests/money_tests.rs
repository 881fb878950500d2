//! Integration tests for base-unit money handling

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

#[test]
fn nightly_rate_in_base_units_matches_native_quote() {
    // 0.075 ETH/day is the deployed initial rate
    let from_native = Money::from_native(dec!(0.075), Currency::Eth).unwrap();
    let from_base = Money::from_base_units(75_000_000_000_000_000, Currency::Eth).unwrap();

    assert_eq!(from_native, from_base);
}

#[test]
fn three_day_charge_is_exact() {
    let rate = Money::from_base_units(75_000_000_000_000_000, Currency::Eth).unwrap();
    let total = rate.checked_mul(3).unwrap();

    assert_eq!(total.base_units(), 225_000_000_000_000_000);
    assert_eq!(total.to_native(), dec!(0.225));
}

#[test]
fn accumulating_payments_conserves_base_units() {
    let mut balance = Money::zero(Currency::Eth);
    let payment = Money::from_base_units(95_000_000_000_000_000, Currency::Eth).unwrap();

    for _ in 0..4 {
        balance = balance.checked_add(&payment).unwrap();
    }

    assert_eq!(balance.base_units(), 380_000_000_000_000_000);
}

#[test]
fn cross_asset_payment_is_rejected() {
    let eth_rate = Money::from_base_units(100, Currency::Eth).unwrap();
    let matic_payment = Money::from_base_units(100, Currency::Matic).unwrap();

    assert!(matches!(
        eth_rate.checked_add(&matic_payment),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
    // Equal base units in different assets are still unequal amounts
    assert_ne!(eth_rate, matic_payment);
}
