//! Request/response data transfer objects
//!
//! Monetary values travel as base-unit decimal strings; clients divide by
//! 10^18 for display.

pub mod bookings;
pub mod ledger;
pub mod rooms;
pub mod session;
pub mod treasury;

use core_kernel::{Currency, Money};

use crate::error::ApiError;

/// Parses a non-negative base-unit amount string into Money
pub(crate) fn parse_base_units(value: &str, currency: Currency) -> Result<Money, ApiError> {
    let units: i128 = value
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid base-unit amount: {value}")))?;
    if units < 0 {
        return Err(ApiError::BadRequest(
            "amount cannot be negative".to_string(),
        ));
    }
    Money::from_base_units(units, currency).map_err(|e| ApiError::BadRequest(e.to_string()))
}
