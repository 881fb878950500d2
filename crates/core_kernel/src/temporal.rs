//! Temporal types for booking occupancy windows
//!
//! A stay is a half-open `[start, end)` window in UTC. Expiry is lazy: a
//! period is never deleted by a timer, it simply stops counting as active
//! once `end <= now` at whatever moment the question is asked.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must be before end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Duration out of range")]
    DurationOutOfRange,
}

/// A half-open occupancy window `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    /// Start of the stay (inclusive)
    pub start: DateTime<Utc>,
    /// End of the stay (exclusive)
    pub end: DateTime<Utc>,
}

impl StayPeriod {
    /// Creates a new stay period, validating that it is non-empty
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TemporalError> {
        if start >= end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a stay of a whole number of days from the given start
    pub fn from_days(start: DateTime<Utc>, days: u32) -> Result<Self, TemporalError> {
        let end = start
            .checked_add_signed(Duration::days(i64::from(days)))
            .ok_or(TemporalError::DurationOutOfRange)?;
        Self::new(start, end)
    }

    /// Returns true if the period contains the given timestamp
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Returns true if the period has ended as of `now`
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end <= now
    }

    /// Pushes the end of the period out by a whole number of days
    pub fn extend_days(&mut self, days: u32) -> Result<(), TemporalError> {
        self.end = self
            .end
            .checked_add_signed(Duration::days(i64::from(days)))
            .ok_or(TemporalError::DurationOutOfRange)?;
        Ok(())
    }

    /// Returns the length of the period
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_period() {
        let result = StayPeriod::new(at(12), at(12));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_from_days() {
        let period = StayPeriod::from_days(at(12), 2).unwrap();
        assert_eq!(period.duration(), Duration::days(2));
    }

    #[test]
    fn test_from_days_rejects_zero() {
        assert!(StayPeriod::from_days(at(12), 0).is_err());
    }

    #[test]
    fn test_contains_is_half_open() {
        let period = StayPeriod::from_days(at(0), 1).unwrap();
        assert!(period.contains(period.start));
        assert!(!period.contains(period.end));
    }

    #[test]
    fn test_has_ended_at_exact_end() {
        let period = StayPeriod::from_days(at(0), 1).unwrap();
        assert!(!period.has_ended(at(23)));
        assert!(period.has_ended(period.end));
    }

    #[test]
    fn test_extend_days() {
        let mut period = StayPeriod::from_days(at(0), 1).unwrap();
        let original_end = period.end;
        period.extend_days(2).unwrap();
        assert_eq!(period.end, original_end + Duration::days(2));
        assert_eq!(period.start, at(0));
    }
}
