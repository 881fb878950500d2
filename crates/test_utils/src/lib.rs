//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the booking ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data (rates, payments, timestamps)
//! - `builders`: Builder patterns for test service construction
//! - `assertions`: Custom assertion helpers for domain types

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
