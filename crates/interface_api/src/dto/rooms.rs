//! Room pricing DTOs
//!
//! The availability listing has no DTO of its own: the domain's `RoomSlot`
//! already serializes as `id | null`, and that fixed-length, order-
//! preserving shape is the interface contract.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomPriceResponse {
    /// Per-day price in base units
    pub price: String,
    pub currency: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetRoomPriceRequest {
    /// New per-day price in base units
    #[validate(length(min = 1, message = "price is required"))]
    pub new_price: String,
}
