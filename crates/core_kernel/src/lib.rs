//! Core Kernel - Foundational types for the booking ledger
//!
//! This crate provides the fundamental building blocks used across the
//! domain and interface crates:
//! - Money types with exact base-unit arithmetic
//! - Stay-period temporal types with lazy expiry semantics
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod money;
pub mod temporal;

pub use identifiers::{AccountId, BookingId, RoomId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{StayPeriod, TemporalError};
