//! Global per-day room pricing

use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Money};

use crate::access::AccessControl;
use crate::error::BookingError;

/// The single per-day price applied uniformly to every room
///
/// Price changes take effect on the next operation and are never
/// retroactive: an existing booking keeps whatever it already paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    price_per_day: Money,
}

impl PricingPolicy {
    /// Creates the policy with its initial per-day price
    pub fn new(price_per_day: Money) -> Self {
        Self { price_per_day }
    }

    /// Returns the current per-day price; visible to anyone
    pub fn price_per_day(&self) -> Money {
        self.price_per_day
    }

    /// Sets a new per-day price; owner-gated
    ///
    /// The new price must be non-negative and denominated in the same
    /// currency the ledger settles in.
    pub fn set_room_price(
        &mut self,
        new_price: Money,
        caller: AccountId,
        access: &AccessControl,
    ) -> Result<(), BookingError> {
        access.require_owner(caller)?;
        if new_price.currency() != self.price_per_day.currency() {
            return Err(BookingError::Calculation(format!(
                "price currency {} does not match ledger currency {}",
                new_price.currency(),
                self.price_per_day.currency()
            )));
        }
        if new_price.base_units() < 0 {
            return Err(BookingError::Calculation(
                "room price cannot be negative".to_string(),
            ));
        }
        self.price_per_day = new_price;
        Ok(())
    }
}
