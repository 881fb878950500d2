//! Comprehensive tests for domain_booking

use chrono::{DateTime, Duration, TimeZone, Utc};

use core_kernel::{AccountId, Currency, Money, RoomId};
use domain_booking::{
    BookingConfig, BookingError, BookingEvent, BookingService, RoomSlot,
};

const NIGHTLY_RATE: i128 = 75_000_000_000_000_000; // 0.075 ETH

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
        price_per_day: eth(NIGHTLY_RATE),
        owner,
    });
    (service, owner)
}

// ============================================================================
// create_booking
// ============================================================================

mod create_booking_tests {
    use super::*;

    #[test]
    fn test_fails_to_book_an_already_booked_room() {
        let (service, _) = setup_service();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        let err = service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap_err();

        assert_eq!(err, BookingError::RoomUnavailable);
        assert_eq!(err.to_string(), "Room is already booked");
    }

    #[test]
    fn test_fails_if_payment_is_not_exact() {
        let (service, _) = setup_service();

        let err = service
            .create_booking(
                RoomId::new(2),
                1,
                eth(1_400_000_000_000_000),
                AccountId::new(),
                noon(),
            )
            .unwrap_err();

        assert_eq!(err, BookingError::InvalidPayment);
        assert_eq!(err.to_string(), "Room booking amount is invalid");
        assert!(service.balance().is_zero());
    }

    #[test]
    fn test_gets_booking_amount_in_full() {
        let (service, _) = setup_service();

        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        assert_eq!(service.balance().base_units(), 75_000_000_000_000_000);
    }

    #[test]
    fn test_rejects_room_outside_inventory() {
        let (service, _) = setup_service();

        let err = service
            .create_booking(RoomId::new(21), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap_err();

        assert_eq!(err, BookingError::InvalidRoom(RoomId::new(21)));
        assert!(service.balance().is_zero());
    }

    #[test]
    fn test_multi_day_booking_charges_price_times_duration() {
        let (service, _) = setup_service();
        let tenant = AccountId::new();

        let record = service
            .create_booking(RoomId::new(7), 3, eth(NIGHTLY_RATE * 3), tenant, noon())
            .unwrap();

        assert_eq!(record.period.start, noon());
        assert_eq!(record.period.end, noon() + Duration::days(3));
        assert_eq!(service.balance().base_units(), 225_000_000_000_000_000);
    }

    #[test]
    fn test_room_frees_itself_after_checkout() {
        let (service, _) = setup_service();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        let after = noon() + Duration::days(1);
        let rebooked = service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), after)
            .unwrap();

        assert_eq!(rebooked.period.start, after);
        assert_eq!(service.balance().base_units(), NIGHTLY_RATE * 2);
    }
}

// ============================================================================
// extend_booking
// ============================================================================

mod extend_booking_tests {
    use super::*;

    #[test]
    fn test_extends_an_already_booked_room() {
        let (service, _) = setup_service();
        let tenant = AccountId::new();
        let created = service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();

        let extended = service
            .extend_booking(RoomId::new(1), 2, eth(150_000_000_000_000_000), tenant, noon())
            .unwrap();

        assert_eq!(extended.period.end, created.period.end + Duration::days(2));
        assert_eq!(service.balance().base_units(), 225_000_000_000_000_000);
    }

    #[test]
    fn test_fails_to_extend_if_payment_is_not_exact() {
        let (service, _) = setup_service();
        let tenant = AccountId::new();
        let created = service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();

        let err = service
            .extend_booking(RoomId::new(1), 2, eth(1_400_000_000_000_000), tenant, noon())
            .unwrap_err();

        assert_eq!(err, BookingError::InvalidPayment);
        assert_eq!(service.booking(RoomId::new(1)).unwrap().period.end, created.period.end);
        assert_eq!(service.balance().base_units(), NIGHTLY_RATE);
    }

    #[test]
    fn test_fails_to_extend_a_room_with_no_active_booking() {
        let (service, _) = setup_service();

        let err = service
            .extend_booking(RoomId::new(4), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap_err();

        assert_eq!(err, BookingError::RoomUnavailable);
    }

    #[test]
    fn test_anyone_may_pay_for_an_extension() {
        let (service, _) = setup_service();
        let tenant = AccountId::new();
        let benefactor = AccountId::new();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();

        let extended = service
            .extend_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), benefactor, noon())
            .unwrap();

        // The room stays with the original tenant
        assert_eq!(extended.tenant, tenant);
    }
}

// ============================================================================
// pricing
// ============================================================================

mod pricing_tests {
    use super::*;

    #[test]
    fn test_gets_booking_price_of_rooms() {
        let (service, _) = setup_service();
        assert_eq!(service.room_price().base_units(), 75_000_000_000_000_000);
    }

    #[test]
    fn test_sets_booking_price_of_rooms() {
        let (service, owner) = setup_service();

        service
            .set_room_price(eth(95_000_000_000_000_000), owner)
            .unwrap();

        assert_eq!(service.room_price().base_units(), 95_000_000_000_000_000);
    }

    #[test]
    fn test_non_owner_cannot_set_price() {
        let (service, _) = setup_service();

        let err = service
            .set_room_price(eth(1), AccountId::new())
            .unwrap_err();

        assert_eq!(err, BookingError::Unauthorized);
        assert_eq!(service.room_price().base_units(), 75_000_000_000_000_000);
    }

    #[test]
    fn test_new_price_applies_to_subsequent_bookings_only() {
        let (service, owner) = setup_service();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        service
            .set_room_price(eth(95_000_000_000_000_000), owner)
            .unwrap();

        // The old rate no longer passes the gate
        let err = service
            .create_booking(RoomId::new(2), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap_err();
        assert_eq!(err, BookingError::InvalidPayment);

        service
            .create_booking(
                RoomId::new(2),
                1,
                eth(95_000_000_000_000_000),
                AccountId::new(),
                noon(),
            )
            .unwrap();
        assert_eq!(
            service.balance().base_units(),
            75_000_000_000_000_000 + 95_000_000_000_000_000
        );
    }
}

// ============================================================================
// availability listing
// ============================================================================

mod availability_tests {
    use super::*;

    #[test]
    fn test_gets_a_list_of_all_available_rooms() {
        let (service, _) = setup_service();

        let ids: Vec<u16> = service
            .available_rooms(noon())
            .iter()
            .filter_map(|slot| slot.room_id())
            .map(|id| id.value())
            .collect();

        assert_eq!(ids, (1..=20).collect::<Vec<u16>>());
    }

    #[test]
    fn test_listing_keeps_length_and_order_with_gaps() {
        let (service, _) = setup_service();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();
        service
            .create_booking(RoomId::new(15), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        let listing = service.available_rooms(noon());

        assert_eq!(listing.len(), 20);
        assert_eq!(listing[0], RoomSlot::Unavailable);
        assert_eq!(listing[14], RoomSlot::Unavailable);
        assert_eq!(listing[1], RoomSlot::Available(RoomId::new(2)));
        assert_eq!(listing[19], RoomSlot::Available(RoomId::new(20)));
    }
}

// ============================================================================
// treasury
// ============================================================================

mod treasury_tests {
    use super::*;

    #[test]
    fn test_owner_withdrawal_empties_the_balance() {
        let (service, owner) = setup_service();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        let released = service.withdraw(owner).unwrap();

        assert_eq!(released.base_units(), 75_000_000_000_000_000);
        assert_eq!(service.balance().base_units(), 0);
    }

    #[test]
    fn test_non_owner_withdrawal_rejected() {
        let (service, _) = setup_service();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        let err = service.withdraw(AccountId::new()).unwrap_err();

        assert_eq!(err, BookingError::Unauthorized);
        assert_eq!(service.balance().base_units(), NIGHTLY_RATE);
    }

    #[test]
    fn test_balance_tracks_payments_minus_withdrawals() {
        let (service, owner) = setup_service();
        let tenant = AccountId::new();

        service
            .create_booking(RoomId::new(1), 2, eth(NIGHTLY_RATE * 2), tenant, noon())
            .unwrap();
        service
            .extend_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();
        assert_eq!(service.balance().base_units(), NIGHTLY_RATE * 3);

        service.withdraw(owner).unwrap();
        assert_eq!(service.balance().base_units(), 0);

        service
            .create_booking(RoomId::new(2), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();
        assert_eq!(service.balance().base_units(), NIGHTLY_RATE);
    }
}

// ============================================================================
// ownership
// ============================================================================

mod ownership_tests {
    use super::*;

    #[test]
    fn test_initial_owner_is_reported() {
        let (service, owner) = setup_service();
        assert_eq!(service.owner(), owner);
    }

    #[test]
    fn test_transfer_moves_the_gate() {
        let (service, owner) = setup_service();
        let successor = AccountId::new();
        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), AccountId::new(), noon())
            .unwrap();

        service.transfer_ownership(successor, owner).unwrap();

        assert_eq!(service.owner(), successor);
        assert_eq!(service.withdraw(owner).unwrap_err(), BookingError::Unauthorized);
        assert_eq!(service.withdraw(successor).unwrap().base_units(), NIGHTLY_RATE);
    }

    #[test]
    fn test_transfer_by_non_owner_rejected() {
        let (service, owner) = setup_service();
        let intruder = AccountId::new();

        let err = service.transfer_ownership(intruder, intruder).unwrap_err();

        assert_eq!(err, BookingError::Unauthorized);
        assert_eq!(service.owner(), owner);
    }
}

// ============================================================================
// events
// ============================================================================

mod event_tests {
    use super::*;

    #[test]
    fn test_each_committed_mutation_records_one_event() {
        let (service, owner) = setup_service();
        let tenant = AccountId::new();

        service
            .create_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();
        service
            .extend_booking(RoomId::new(1), 1, eth(NIGHTLY_RATE), tenant, noon())
            .unwrap();
        service
            .set_room_price(eth(95_000_000_000_000_000), owner)
            .unwrap();
        service.withdraw(owner).unwrap();

        let events = service.take_events();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], BookingEvent::BookingCreated { .. }));
        assert!(matches!(events[1], BookingEvent::BookingExtended { .. }));
        assert!(matches!(events[2], BookingEvent::RoomPriceChanged { .. }));
        assert!(matches!(events[3], BookingEvent::FundsWithdrawn { .. }));
    }

    #[test]
    fn test_failed_operations_record_nothing() {
        let (service, _) = setup_service();

        let _ = service.create_booking(
            RoomId::new(1),
            1,
            eth(1),
            AccountId::new(),
            noon(),
        );
        let _ = service.withdraw(AccountId::new());

        assert!(service.take_events().is_empty());
    }
}
