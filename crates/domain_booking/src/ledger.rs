//! Room ledger: the fixed inventory and its booking state
//!
//! # Invariants
//!
//! - The room id space is `[1, N]`, fixed at construction, never resized
//! - At most one booking record exists per room
//! - A room is available iff it has no record or the record has ended
//! - A failed operation leaves the ledger byte-for-byte unchanged

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use core_kernel::{AccountId, RoomId};

use crate::booking::{BookingRecord, RoomSlot};
use crate::error::BookingError;

/// The booking ledger over a fixed inventory of rooms
///
/// Expiry is lazy: records are never swept by a timer. Availability is
/// recomputed against the caller-supplied `now` on every read, and an ended
/// record is simply overwritten by the next booking of its room.
#[derive(Debug, Clone)]
pub struct RoomLedger {
    room_count: u16,
    bookings: BTreeMap<RoomId, BookingRecord>,
}

impl RoomLedger {
    /// Creates a ledger with rooms `1..=room_count`, all available
    pub fn new(room_count: u16) -> Self {
        Self {
            room_count,
            bookings: BTreeMap::new(),
        }
    }

    /// Returns the fixed number of rooms
    pub fn room_count(&self) -> u16 {
        self.room_count
    }

    /// Returns the booking record currently stored for a room, if any
    ///
    /// The record may already have ended; callers interested in occupancy
    /// should check `is_active` against their own `now`.
    pub fn booking(&self, room_id: RoomId) -> Option<&BookingRecord> {
        self.bookings.get(&room_id)
    }

    /// Returns true if the room can be booked as of `now`
    pub fn is_available(&self, room_id: RoomId, now: DateTime<Utc>) -> Result<bool, BookingError> {
        self.ensure_known_room(room_id)?;
        Ok(self.slot_is_free(room_id, now))
    }

    /// Produces the full-length, order-preserving availability listing
    ///
    /// Position i always describes room i+1, so the shape is stable for
    /// callers that index into it; most filter out the unavailable slots.
    pub fn available_rooms(&self, now: DateTime<Utc>) -> Vec<RoomSlot> {
        (1..=self.room_count)
            .map(RoomId::new)
            .map(|id| {
                if self.slot_is_free(id, now) {
                    RoomSlot::Available(id)
                } else {
                    RoomSlot::Unavailable
                }
            })
            .collect()
    }

    /// Books a room for `tenant`, starting at `now`
    ///
    /// # Errors
    ///
    /// - `InvalidRoom` if the id lies outside `[1, N]`
    /// - `InvalidDuration` if `duration_days` is zero
    /// - `RoomUnavailable` if a non-ended record exists for the room
    pub fn create_booking(
        &mut self,
        room_id: RoomId,
        tenant: AccountId,
        duration_days: u32,
        now: DateTime<Utc>,
    ) -> Result<BookingRecord, BookingError> {
        self.ensure_known_room(room_id)?;
        if duration_days == 0 {
            return Err(BookingError::InvalidDuration);
        }
        if !self.slot_is_free(room_id, now) {
            return Err(BookingError::RoomUnavailable);
        }

        let record = BookingRecord::new(room_id, tenant, now, duration_days)?;
        self.bookings.insert(room_id, record.clone());
        Ok(record)
    }

    /// Extends the active booking on a room by `extra_days`
    ///
    /// # Errors
    ///
    /// - `InvalidDuration` if `extra_days` is zero
    /// - `RoomUnavailable` if the room has no active record; ids outside
    ///   the inventory never have records, so they surface the same way
    pub fn extend_booking(
        &mut self,
        room_id: RoomId,
        extra_days: u32,
        now: DateTime<Utc>,
    ) -> Result<BookingRecord, BookingError> {
        if extra_days == 0 {
            return Err(BookingError::InvalidDuration);
        }

        let record = self
            .bookings
            .get_mut(&room_id)
            .filter(|record| record.is_active(now))
            .ok_or(BookingError::RoomUnavailable)?;

        record.extend(extra_days)?;
        Ok(record.clone())
    }

    fn ensure_known_room(&self, room_id: RoomId) -> Result<(), BookingError> {
        if room_id.value() == 0 || room_id.value() > self.room_count {
            return Err(BookingError::InvalidRoom(room_id));
        }
        Ok(())
    }

    fn slot_is_free(&self, room_id: RoomId, now: DateTime<Utc>) -> bool {
        self.bookings
            .get(&room_id)
            .map_or(true, |record| !record.is_active(now))
    }
}
