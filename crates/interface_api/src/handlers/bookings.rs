//! Booking handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use validator::Validate;

use core_kernel::{AccountId, RoomId};

use crate::dto::bookings::{BookingResponse, CreateBookingRequest, ExtendBookingRequest};
use crate::dto::parse_base_units;
use crate::error::ApiError;
use crate::AppState;

/// Books a room for the connected account
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(caller): Extension<AccountId>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let now = Utc::now();
    let payment = parse_base_units(&request.payment, state.service.currency())?;
    let record = state.service.create_booking(
        RoomId::new(request.room_id),
        request.duration_days,
        payment,
        caller,
        now,
    )?;

    Ok(Json(record.into()))
}

/// Extends the active booking on a room
pub async fn extend_booking(
    State(state): State<AppState>,
    Extension(caller): Extension<AccountId>,
    Path(room_id): Path<u16>,
    Json(request): Json<ExtendBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let now = Utc::now();
    let payment = parse_base_units(&request.payment, state.service.currency())?;
    let record = state.service.extend_booking(
        RoomId::new(room_id),
        request.extra_days,
        payment,
        caller,
        now,
    )?;

    Ok(Json(record.into()))
}

/// Returns the booking record stored for a room
pub async fn get_booking(
    State(state): State<AppState>,
    Path(room_id): Path<u16>,
) -> Result<Json<BookingResponse>, ApiError> {
    state
        .service
        .booking(RoomId::new(room_id))
        .map(|record| Json(record.into()))
        .ok_or_else(|| ApiError::NotFound(format!("no booking for room {room_id}")))
}
