//! Custom assertion helpers for domain types

use core_kernel::Money;
use domain_booking::RoomSlot;

/// Asserts that a money value holds exactly `expected` base units
pub fn assert_base_units(money: &Money, expected: i128) {
    assert_eq!(
        money.base_units(),
        expected,
        "expected {} base units, got {}",
        expected,
        money.base_units()
    );
}

/// Asserts that a listing reports exactly `expected` as its available ids,
/// in order, while keeping its full fixed length
pub fn assert_available_ids(listing: &[RoomSlot], total_rooms: usize, expected: &[u16]) {
    assert_eq!(listing.len(), total_rooms, "listing length must stay fixed");

    let ids: Vec<u16> = listing
        .iter()
        .filter_map(|slot| slot.room_id())
        .map(|id| id.value())
        .collect();
    assert_eq!(ids, expected);
}
