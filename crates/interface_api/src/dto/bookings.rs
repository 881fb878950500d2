//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_booking::BookingRecord;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub room_id: u16,
    #[validate(range(min = 1, message = "duration must cover at least one day"))]
    pub duration_days: u32,
    /// Attached payment in base units
    #[validate(length(min = 1, message = "payment is required"))]
    pub payment: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExtendBookingRequest {
    #[validate(range(min = 1, message = "extension must cover at least one day"))]
    pub extra_days: u32,
    /// Attached payment in base units
    #[validate(length(min = 1, message = "payment is required"))]
    pub payment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: String,
    pub room_id: u16,
    pub tenant: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<BookingRecord> for BookingResponse {
    fn from(record: BookingRecord) -> Self {
        Self {
            booking_id: record.id.to_string(),
            room_id: record.room_id.value(),
            tenant: *record.tenant.as_uuid(),
            start: record.period.start,
            end: record.period.end,
        }
    }
}
