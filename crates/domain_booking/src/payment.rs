//! Exact-payment validation
//!
//! The gate and the mutation it guards are one atomic unit: callers must
//! validate before touching any state, and a gate failure means nothing
//! else may change.

use core_kernel::Money;

use crate::error::BookingError;

/// Validates attached payments against the quoted charge
pub struct PaymentGate;

impl PaymentGate {
    /// Checks that `paid` equals `price_per_day x duration_days` exactly
    ///
    /// No rounding tolerance and no overpayment allowance; a payment in a
    /// different currency can never equal the quote and is rejected the
    /// same way. Returns the validated total.
    ///
    /// # Errors
    ///
    /// - `InvalidDuration` if `duration_days` is zero
    /// - `InvalidPayment` if `paid` differs from the total in any way
    pub fn validate(
        price_per_day: &Money,
        duration_days: u32,
        paid: &Money,
    ) -> Result<Money, BookingError> {
        if duration_days == 0 {
            return Err(BookingError::InvalidDuration);
        }

        let due = price_per_day.checked_mul(duration_days)?;
        if paid != &due {
            return Err(BookingError::InvalidPayment);
        }

        Ok(due)
    }
}
