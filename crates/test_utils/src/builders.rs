//! Test data builders
//!
//! Builders construct services with sensible defaults so tests specify only
//! what they care about.

use std::sync::Arc;

use core_kernel::{AccountId, Money, RoomId};
use domain_booking::{BookingConfig, BookingService};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Builder for a booking service pre-seeded with state
pub struct TestServiceBuilder {
    room_count: u16,
    price_per_day: Money,
    owner: AccountId,
    booked_rooms: Vec<(u16, u32)>,
}

impl Default for TestServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestServiceBuilder {
    /// Creates a builder with the observed deployment defaults
    pub fn new() -> Self {
        Self {
            room_count: 20,
            price_per_day: MoneyFixtures::nightly_rate(),
            owner: AccountId::new(),
            booked_rooms: Vec::new(),
        }
    }

    /// Sets the inventory size
    pub fn with_room_count(mut self, room_count: u16) -> Self {
        self.room_count = room_count;
        self
    }

    /// Sets the per-day price
    pub fn with_price_per_day(mut self, price: Money) -> Self {
        self.price_per_day = price;
        self
    }

    /// Sets the owner identity
    pub fn with_owner(mut self, owner: AccountId) -> Self {
        self.owner = owner;
        self
    }

    /// Books a room for `days` starting at the shared check-in instant
    pub fn with_booked_room(mut self, room_id: u16, days: u32) -> Self {
        self.booked_rooms.push((room_id, days));
        self
    }

    /// Builds the service, applying any seed bookings with exact payments
    pub fn build(self) -> (Arc<BookingService>, AccountId) {
        let owner = self.owner;
        let service = BookingService::new(BookingConfig {
            room_count: self.room_count,
            price_per_day: self.price_per_day,
            owner,
        });

        for (room_id, days) in self.booked_rooms {
            let payment = self
                .price_per_day
                .checked_mul(days)
                .expect("seed charge is representable");
            service
                .create_booking(
                    RoomId::new(room_id),
                    days,
                    payment,
                    AccountId::new(),
                    TemporalFixtures::check_in(),
                )
                .expect("seed booking succeeds");
        }
        // Seeding is setup, not behavior under test
        service.take_events();

        (Arc::new(service), owner)
    }
}
