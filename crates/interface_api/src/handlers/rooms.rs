//! Room pricing and availability handlers

use axum::{extract::State, Extension, Json};
use chrono::Utc;
use validator::Validate;

use core_kernel::AccountId;
use domain_booking::RoomSlot;

use crate::dto::rooms::{RoomPriceResponse, SetRoomPriceRequest};
use crate::dto::parse_base_units;
use crate::error::ApiError;
use crate::AppState;

/// Returns the current per-day room price
pub async fn get_room_price(
    State(state): State<AppState>,
) -> Result<Json<RoomPriceResponse>, ApiError> {
    let price = state.service.room_price();
    Ok(Json(RoomPriceResponse {
        price: price.base_units().to_string(),
        currency: price.currency().to_string(),
    }))
}

/// Sets a new per-day room price; owner-gated in the domain
pub async fn set_room_price(
    State(state): State<AppState>,
    Extension(caller): Extension<AccountId>,
    Json(request): Json<SetRoomPriceRequest>,
) -> Result<Json<RoomPriceResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let new_price = parse_base_units(&request.new_price, state.service.currency())?;
    state.service.set_room_price(new_price, caller)?;

    let price = state.service.room_price();
    Ok(Json(RoomPriceResponse {
        price: price.base_units().to_string(),
        currency: price.currency().to_string(),
    }))
}

/// Returns the full-length availability listing
///
/// The response is always N entries long, ascending by room id, each entry
/// the room id (available) or null (booked). `now` is captured once here
/// and used for the whole evaluation.
pub async fn get_available_rooms(State(state): State<AppState>) -> Json<Vec<RoomSlot>> {
    let now = Utc::now();
    Json(state.service.available_rooms(now))
}
