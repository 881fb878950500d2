//! Custodial treasury account
//!
//! The treasury accumulates exactly the amounts that passed the payment
//! gate and releases its full balance to the owner on withdrawal. There is
//! no deposit operation of its own; credits happen only as the final step
//! of a successful booking or extension.

use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Currency, Money};

use crate::access::AccessControl;
use crate::error::BookingError;

/// Holds the funds paid into the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryAccount {
    balance: Money,
}

impl TreasuryAccount {
    /// Creates an empty treasury in the given settlement currency
    pub fn new(currency: Currency) -> Self {
        Self {
            balance: Money::zero(currency),
        }
    }

    /// Returns the current held balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Computes the balance after a credit, without applying it
    ///
    /// Callers that must mutate other state between the check and the
    /// credit use this with `commit` so the pair forms one atomic unit.
    pub fn preview_credit(&self, amount: &Money) -> Result<Money, BookingError> {
        Ok(self.balance.checked_add(amount)?)
    }

    /// Applies a balance previously computed with `preview_credit`
    pub fn commit(&mut self, new_balance: Money) {
        self.balance = new_balance;
    }

    /// Credits the treasury in one step
    pub fn credit(&mut self, amount: &Money) -> Result<(), BookingError> {
        let new_balance = self.preview_credit(amount)?;
        self.commit(new_balance);
        Ok(())
    }

    /// Releases the entire balance to the owner, resetting it to zero
    ///
    /// Returns the released amount. Fails with `Unauthorized` for any
    /// caller other than the current owner, leaving the balance untouched.
    pub fn withdraw_all(
        &mut self,
        caller: AccountId,
        access: &AccessControl,
    ) -> Result<Money, BookingError> {
        access.require_owner(caller)?;
        let released = self.balance;
        self.balance = Money::zero(self.balance.currency());
        Ok(released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eth(units: i128) -> Money {
        Money::from_base_units(units, Currency::Eth).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let treasury = TreasuryAccount::new(Currency::Eth);
        assert!(treasury.balance().is_zero());
    }

    #[test]
    fn test_credit_accumulates_exactly() {
        let mut treasury = TreasuryAccount::new(Currency::Eth);

        treasury.credit(&eth(75_000_000_000_000_000)).unwrap();
        treasury.credit(&eth(150_000_000_000_000_000)).unwrap();

        assert_eq!(treasury.balance().base_units(), 225_000_000_000_000_000);
    }

    #[test]
    fn test_owner_withdraws_everything() {
        let owner = AccountId::new();
        let access = AccessControl::new(owner);
        let mut treasury = TreasuryAccount::new(Currency::Eth);
        treasury.credit(&eth(75_000_000_000_000_000)).unwrap();

        let released = treasury.withdraw_all(owner, &access).unwrap();

        assert_eq!(released.base_units(), 75_000_000_000_000_000);
        assert_eq!(treasury.balance().base_units(), 0);
    }

    #[test]
    fn test_non_owner_withdrawal_rejected() {
        let access = AccessControl::new(AccountId::new());
        let mut treasury = TreasuryAccount::new(Currency::Eth);
        treasury.credit(&eth(100)).unwrap();

        let result = treasury.withdraw_all(AccountId::new(), &access);

        assert_eq!(result, Err(BookingError::Unauthorized));
        assert_eq!(treasury.balance().base_units(), 100);
    }

    #[test]
    fn test_preview_then_commit_matches_credit() {
        let mut a = TreasuryAccount::new(Currency::Eth);
        let mut b = TreasuryAccount::new(Currency::Eth);

        let new_balance = a.preview_credit(&eth(42)).unwrap();
        a.commit(new_balance);
        b.credit(&eth(42)).unwrap();

        assert_eq!(a.balance(), b.balance());
    }
}
