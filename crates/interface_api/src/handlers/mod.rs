//! Request handlers

pub mod bookings;
pub mod health;
pub mod ledger;
pub mod rooms;
pub mod session;
pub mod treasury;
