//! Domain events for the booking ledger
//!
//! Events record significant mutations for audit trails and downstream
//! integration. They are appended only after an operation has fully
//! committed; failed operations leave no event behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, BookingId, Money, RoomId};

/// Events emitted by the booking service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BookingEvent {
    /// A room was booked
    BookingCreated {
        booking_id: BookingId,
        room_id: RoomId,
        tenant: AccountId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        amount_paid: Money,
        timestamp: DateTime<Utc>,
    },

    /// An active booking was extended
    BookingExtended {
        booking_id: BookingId,
        room_id: RoomId,
        tenant: AccountId,
        new_end: DateTime<Utc>,
        amount_paid: Money,
        timestamp: DateTime<Utc>,
    },

    /// The owner changed the per-day price
    RoomPriceChanged {
        old_price: Money,
        new_price: Money,
        timestamp: DateTime<Utc>,
    },

    /// The owner withdrew the treasury balance
    FundsWithdrawn {
        recipient: AccountId,
        amount: Money,
        timestamp: DateTime<Utc>,
    },

    /// Ownership moved to a new account
    OwnershipTransferred {
        previous_owner: AccountId,
        new_owner: AccountId,
        timestamp: DateTime<Utc>,
    },
}
