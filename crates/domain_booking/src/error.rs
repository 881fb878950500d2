//! Booking domain errors
//!
//! The reason strings for `RoomUnavailable` and `InvalidPayment` are part of
//! the external contract: integrations branch on the literal text, so they
//! must never change.

use core_kernel::{MoneyError, RoomId, TemporalError};
use thiserror::Error;

/// Errors that can occur in the booking domain
///
/// Every failure is a synchronous, atomic abort: ledger and treasury state
/// are untouched when any of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The room has a booking whose end has not yet passed
    #[error("Room is already booked")]
    RoomUnavailable,

    /// The attached payment does not equal price x duration exactly
    #[error("Room booking amount is invalid")]
    InvalidPayment,

    /// An owner-gated operation was invoked by a non-owner
    #[error("Caller is not the owner")]
    Unauthorized,

    /// The room id lies outside the fixed inventory range
    #[error("Room {0} is out of range")]
    InvalidRoom(RoomId),

    /// Bookings and extensions must cover at least one day
    #[error("Booking duration must be at least one day")]
    InvalidDuration,

    /// Checked arithmetic failed; not observed under realistic balances
    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl From<MoneyError> for BookingError {
    fn from(err: MoneyError) -> Self {
        BookingError::Calculation(err.to_string())
    }
}

impl From<TemporalError> for BookingError {
    fn from(err: TemporalError) -> Self {
        BookingError::Calculation(err.to_string())
    }
}
