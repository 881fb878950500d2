//! Booking Domain
//!
//! This crate implements the room-booking ledger: a fixed inventory of
//! rooms, each independently reservable, guarded by an exact-payment
//! invariant and a double-booking invariant, with owner-gated pricing and
//! treasury withdrawal.
//!
//! # Room lifecycle
//!
//! ```text
//! Available --create_booking--> Booked(tenant, end)
//! Booked    --extend_booking--> Booked(tenant, end + extra)
//! Booked    --(end <= now, observed lazily)--> Available
//! ```
//!
//! There is no cancellation transition and no background expiry sweep;
//! availability is recomputed against the caller-supplied `now` at every
//! read.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_booking::{BookingConfig, BookingService};
//!
//! let service = BookingService::new(BookingConfig {
//!     room_count: 20,
//!     price_per_day: nightly_rate,
//!     owner,
//! });
//!
//! let record = service.create_booking(room, 2, payment, caller, now)?;
//! ```

pub mod access;
pub mod booking;
pub mod error;
pub mod events;
pub mod ledger;
pub mod payment;
pub mod pricing;
pub mod service;
pub mod treasury;

pub use access::AccessControl;
pub use booking::{BookingRecord, RoomSlot};
pub use error::BookingError;
pub use events::BookingEvent;
pub use ledger::RoomLedger;
pub use payment::PaymentGate;
pub use pricing::PricingPolicy;
pub use service::{BookingConfig, BookingService};
pub use treasury::TreasuryAccount;
