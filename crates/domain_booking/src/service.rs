//! The serialized booking service
//!
//! `BookingService` is the consistency boundary for the whole ledger: one
//! reader-writer lock guards rooms, pricing, treasury, and ownership as a
//! single unit. Every mutating operation holds the write lock across its
//! entire check-then-commit sequence, so two callers can never both observe
//! a room as free and both book it, and the treasury can never drift from
//! the sum of gated payments. Read operations share the read lock and see
//! either fully pre- or fully post-mutation state.
//!
//! The `now` an operation reasons with is supplied by the caller, captured
//! once at entry, and reused throughout; the service never re-samples time
//! mid-operation.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use core_kernel::{AccountId, Currency, Money, RoomId};

use crate::access::AccessControl;
use crate::booking::{BookingRecord, RoomSlot};
use crate::error::BookingError;
use crate::events::BookingEvent;
use crate::ledger::RoomLedger;
use crate::payment::PaymentGate;
use crate::pricing::PricingPolicy;
use crate::treasury::TreasuryAccount;

/// Deployment-time parameters for a booking ledger
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Number of rooms in the fixed inventory
    pub room_count: u16,
    /// Initial per-day price
    pub price_per_day: Money,
    /// Initial owner identity
    pub owner: AccountId,
}

struct LedgerState {
    ledger: RoomLedger,
    pricing: PricingPolicy,
    treasury: TreasuryAccount,
    access: AccessControl,
    events: Vec<BookingEvent>,
}

/// Thread-safe facade over the booking ledger
pub struct BookingService {
    state: RwLock<LedgerState>,
}

impl BookingService {
    /// Creates a service with every room available and an empty treasury
    pub fn new(config: BookingConfig) -> Self {
        let currency = config.price_per_day.currency();
        Self {
            state: RwLock::new(LedgerState {
                ledger: RoomLedger::new(config.room_count),
                pricing: PricingPolicy::new(config.price_per_day),
                treasury: TreasuryAccount::new(currency),
                access: AccessControl::new(config.owner),
                events: Vec::new(),
            }),
        }
    }

    /// Returns the current owner identity
    pub fn owner(&self) -> AccountId {
        self.state.read().access.owner()
    }

    /// Returns the settlement currency of the ledger
    pub fn currency(&self) -> Currency {
        self.state.read().treasury.balance().currency()
    }

    /// Returns the current per-day room price
    pub fn room_price(&self) -> Money {
        self.state.read().pricing.price_per_day()
    }

    /// Returns the current treasury balance
    pub fn balance(&self) -> Money {
        self.state.read().treasury.balance()
    }

    /// Returns the fixed number of rooms
    pub fn room_count(&self) -> u16 {
        self.state.read().ledger.room_count()
    }

    /// Produces the order-preserving availability listing as of `now`
    pub fn available_rooms(&self, now: DateTime<Utc>) -> Vec<RoomSlot> {
        self.state.read().ledger.available_rooms(now)
    }

    /// Returns the booking record stored for a room, if any
    pub fn booking(&self, room_id: RoomId) -> Option<BookingRecord> {
        self.state.read().ledger.booking(room_id).cloned()
    }

    /// Books a room for `caller`, starting at `now`
    ///
    /// The attached payment must equal `price x duration_days` exactly. On
    /// success the payment is credited to the treasury; on any failure the
    /// ledger and treasury are untouched.
    pub fn create_booking(
        &self,
        room_id: RoomId,
        duration_days: u32,
        paid: Money,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<BookingRecord, BookingError> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let due = PaymentGate::validate(&state.pricing.price_per_day(), duration_days, &paid)?;
        let credited = state.treasury.preview_credit(&due)?;
        let record = state
            .ledger
            .create_booking(room_id, caller, duration_days, now)?;
        state.treasury.commit(credited);

        state.events.push(BookingEvent::BookingCreated {
            booking_id: record.id,
            room_id,
            tenant: caller,
            start: record.period.start,
            end: record.period.end,
            amount_paid: due,
            timestamp: now,
        });
        tracing::info!(room = %room_id, tenant = %caller, amount = %due, "booking created");

        Ok(record)
    }

    /// Extends the active booking on a room by `extra_days`
    ///
    /// Any caller willing to pay the exact charge may extend; the original
    /// tenant keeps the room either way.
    pub fn extend_booking(
        &self,
        room_id: RoomId,
        extra_days: u32,
        paid: Money,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<BookingRecord, BookingError> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let due = PaymentGate::validate(&state.pricing.price_per_day(), extra_days, &paid)?;
        let credited = state.treasury.preview_credit(&due)?;
        let record = state.ledger.extend_booking(room_id, extra_days, now)?;
        state.treasury.commit(credited);

        state.events.push(BookingEvent::BookingExtended {
            booking_id: record.id,
            room_id,
            tenant: record.tenant,
            new_end: record.period.end,
            amount_paid: due,
            timestamp: now,
        });
        tracing::info!(room = %room_id, paid_by = %caller, amount = %due, "booking extended");

        Ok(record)
    }

    /// Sets a new per-day price; owner-gated, effective immediately
    pub fn set_room_price(
        &self,
        new_price: Money,
        caller: AccountId,
    ) -> Result<(), BookingError> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let old_price = state.pricing.price_per_day();
        state
            .pricing
            .set_room_price(new_price, caller, &state.access)?;

        state.events.push(BookingEvent::RoomPriceChanged {
            old_price,
            new_price,
            timestamp: Utc::now(),
        });
        tracing::info!(%old_price, %new_price, "room price changed");

        Ok(())
    }

    /// Releases the entire treasury balance to the owner
    ///
    /// Returns the released amount; the balance is exactly zero afterwards.
    pub fn withdraw(&self, caller: AccountId) -> Result<Money, BookingError> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let released = state.treasury.withdraw_all(caller, &state.access)?;

        state.events.push(BookingEvent::FundsWithdrawn {
            recipient: caller,
            amount: released,
            timestamp: Utc::now(),
        });
        tracing::info!(recipient = %caller, amount = %released, "treasury withdrawn");

        Ok(released)
    }

    /// Hands ownership to `new_owner`; owner-gated
    pub fn transfer_ownership(
        &self,
        new_owner: AccountId,
        caller: AccountId,
    ) -> Result<(), BookingError> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let previous = state.access.transfer_ownership(new_owner, caller)?;

        state.events.push(BookingEvent::OwnershipTransferred {
            previous_owner: previous,
            new_owner,
            timestamp: Utc::now(),
        });
        tracing::info!(previous = %previous, new = %new_owner, "ownership transferred");

        Ok(())
    }

    /// Drains and returns the recorded domain events
    pub fn take_events(&self) -> Vec<BookingEvent> {
        std::mem::take(&mut self.state.write().events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn eth(units: i128) -> Money {
        Money::from_base_units(units, Currency::Eth).unwrap()
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn setup_service() -> (BookingService, AccountId) {
        let owner = AccountId::new();
        let service = BookingService::new(BookingConfig {
            room_count: 20,
            price_per_day: eth(75_000_000_000_000_000),
            owner,
        });
        (service, owner)
    }

    #[test]
    fn test_successful_booking_credits_treasury() {
        let (service, _) = setup_service();
        let tenant = AccountId::new();

        service
            .create_booking(RoomId::new(1), 1, eth(75_000_000_000_000_000), tenant, noon())
            .unwrap();

        assert_eq!(service.balance().base_units(), 75_000_000_000_000_000);
    }

    #[test]
    fn test_failed_booking_leaves_no_trace() {
        let (service, _) = setup_service();
        let tenant = AccountId::new();
        service
            .create_booking(RoomId::new(1), 1, eth(75_000_000_000_000_000), tenant, noon())
            .unwrap();
        service.take_events();

        let result = service.create_booking(
            RoomId::new(1),
            1,
            eth(75_000_000_000_000_000),
            AccountId::new(),
            noon(),
        );

        assert_eq!(result, Err(BookingError::RoomUnavailable));
        assert_eq!(service.balance().base_units(), 75_000_000_000_000_000);
        assert!(service.take_events().is_empty());
        assert_eq!(service.booking(RoomId::new(1)).unwrap().tenant, tenant);
    }

    #[test]
    fn test_events_record_committed_mutations() {
        let (service, owner) = setup_service();
        let tenant = AccountId::new();

        service
            .create_booking(RoomId::new(2), 2, eth(150_000_000_000_000_000), tenant, noon())
            .unwrap();
        service.withdraw(owner).unwrap();

        let events = service.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], BookingEvent::BookingCreated { .. }));
        assert!(matches!(events[1], BookingEvent::FundsWithdrawn { .. }));
        // Drained
        assert!(service.take_events().is_empty());
    }
}
