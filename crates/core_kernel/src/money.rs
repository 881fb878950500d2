//! Money types with precise base-unit arithmetic
//!
//! This module provides a type-safe representation of monetary values in the
//! smallest denomination of a native settlement asset, using rust_decimal so
//! that amounts never pass through floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Native settlement assets the ledger can be deployed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eth,
    Matic,
}

impl Currency {
    /// Returns the number of base-unit decimal places for this asset
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Eth | Currency::Matic => 18,
        }
    }

    /// Returns the asset symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eth => "ETH",
            Currency::Matic => "MATIC",
        }
    }

    fn base_unit_factor(&self) -> Decimal {
        Decimal::from_i128_with_scale(10i128.pow(self.decimal_places()), 0)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount held in base units of its currency
///
/// Amounts are stored as whole base units (e.g. wei for ETH), so equality is
/// exact and arithmetic never rounds. Conversions to native units exist only
/// for display and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a Money value from whole base units
    pub fn from_base_units(units: i128, currency: Currency) -> Result<Self, MoneyError> {
        let amount =
            Decimal::try_from_i128_with_scale(units, 0).map_err(|_| MoneyError::Overflow)?;
        Ok(Self { amount, currency })
    }

    /// Creates a Money value from an amount in native units (e.g. 0.075 ETH)
    ///
    /// Fails if the native amount does not land on a whole base unit.
    pub fn from_native(native: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        let amount = native
            .checked_mul(currency.base_unit_factor())
            .ok_or(MoneyError::Overflow)?
            .normalize();
        if amount.fract() != Decimal::ZERO {
            return Err(MoneyError::InvalidAmount(format!(
                "{native} {currency} is finer than one base unit"
            )));
        }
        Ok(Self { amount, currency })
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount in whole base units
    pub fn base_units(&self) -> i128 {
        self.amount.normalize().mantissa()
    }

    /// Returns the amount in native units
    pub fn to_native(&self) -> Decimal {
        self.amount / self.currency.base_unit_factor()
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Checked addition that fails on currency mismatch or overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    /// Checked subtraction that fails on currency mismatch or overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.require_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    /// Checked multiplication by a whole count (e.g. a number of days)
    pub fn checked_mul(&self, count: u32) -> Result<Money, MoneyError> {
        let amount = self
            .amount
            .checked_mul(Decimal::from(count))
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    fn require_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                other.currency.to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.to_native().normalize(),
            self.currency.symbol()
        )
    }
}
