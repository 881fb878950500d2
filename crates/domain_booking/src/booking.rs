//! Booking records and availability slots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, BookingId, RoomId, StayPeriod, TemporalError};

/// A time-bounded occupancy tying a tenant to a room
///
/// At most one record exists per room. A record whose period has ended is
/// logically gone: it is never actively deleted, and the room it covers
/// counts as available again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Unique identifier for audit and event trails
    pub id: BookingId,
    /// The room this booking occupies
    pub room_id: RoomId,
    /// The account that created the booking
    pub tenant: AccountId,
    /// Occupancy window, end exclusive
    pub period: StayPeriod,
}

impl BookingRecord {
    /// Creates a record starting at `now` and running for `duration_days`
    pub fn new(
        room_id: RoomId,
        tenant: AccountId,
        now: DateTime<Utc>,
        duration_days: u32,
    ) -> Result<Self, TemporalError> {
        Ok(Self {
            id: BookingId::new_v7(),
            room_id,
            tenant,
            period: StayPeriod::from_days(now, duration_days)?,
        })
    }

    /// Returns true if this record still occupies its room as of `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.period.has_ended(now)
    }

    /// Pushes the end of the stay out by `extra_days`
    pub fn extend(&mut self, extra_days: u32) -> Result<(), TemporalError> {
        self.period.extend_days(extra_days)
    }
}

/// One entry of the availability listing
///
/// The listing is always full-length and order-preserving: position i holds
/// either the id of room i+1 (available) or the absent marker. On the wire
/// this serializes as `id | null`, so callers that index into the listing
/// see a stable shape and callers that filter see only the bookable ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomSlot {
    Available(RoomId),
    Unavailable,
}

impl RoomSlot {
    /// Returns the room id if the slot is available
    pub fn room_id(&self) -> Option<RoomId> {
        match self {
            RoomSlot::Available(id) => Some(*id),
            RoomSlot::Unavailable => None,
        }
    }

    /// Returns true if the slot is available
    pub fn is_available(&self) -> bool {
        matches!(self, RoomSlot::Available(_))
    }
}
