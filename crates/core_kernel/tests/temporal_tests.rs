//! Integration tests for stay-period semantics

use chrono::{Duration, TimeZone, Utc};
use core_kernel::{StayPeriod, TemporalError};

#[test]
fn stay_expires_lazily_at_its_end_instant() {
    let check_in = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
    let stay = StayPeriod::from_days(check_in, 2).unwrap();

    assert!(!stay.has_ended(check_in + Duration::days(1)));
    assert!(!stay.has_ended(stay.end - Duration::seconds(1)));
    assert!(stay.has_ended(stay.end));
    assert!(stay.has_ended(stay.end + Duration::days(30)));
}

#[test]
fn extension_moves_only_the_end() {
    let check_in = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
    let mut stay = StayPeriod::from_days(check_in, 1).unwrap();

    stay.extend_days(2).unwrap();

    assert_eq!(stay.start, check_in);
    assert_eq!(stay.duration(), Duration::days(3));
}

#[test]
fn far_future_extension_overflows_cleanly() {
    let check_in = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
    let mut stay = StayPeriod::from_days(check_in, 1).unwrap();

    // u32::MAX days is beyond chrono's representable range
    let result = stay.extend_days(u32::MAX);
    assert_eq!(result, Err(TemporalError::DurationOutOfRange));
}
