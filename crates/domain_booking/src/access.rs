//! Owner-gated access control
//!
//! A single owner identity gates pricing changes and treasury withdrawal.
//! The owner is an explicit value object held by the service state, never
//! ambient process-wide data.

use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

use crate::error::BookingError;

/// Tracks the single privileged owner identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    owner: AccountId,
}

impl AccessControl {
    /// Creates the gate with its initial owner
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    /// Returns the current owner identity
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Fails with `Unauthorized` unless `caller` is the current owner
    pub fn require_owner(&self, caller: AccountId) -> Result<(), BookingError> {
        if caller != self.owner {
            return Err(BookingError::Unauthorized);
        }
        Ok(())
    }

    /// Hands ownership to `new_owner`; only the current owner may do this
    pub fn transfer_ownership(
        &mut self,
        new_owner: AccountId,
        caller: AccountId,
    ) -> Result<AccountId, BookingError> {
        self.require_owner(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}
