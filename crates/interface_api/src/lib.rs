//! HTTP API Layer
//!
//! This crate provides the REST glue over the booking ledger using Axum.
//! It is deliberately thin: caller identity comes from a session token,
//! `now` is captured once per request, and every rule (exact payment,
//! double booking, owner gating) lives in the domain.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_booking::BookingService;

use crate::config::ApiConfig;
use crate::handlers::{bookings, health, ledger, rooms, session, treasury};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BookingService>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - The booking service (the serialization boundary)
/// * `config` - API configuration
pub fn create_router(service: Arc<BookingService>, config: ApiConfig) -> Router {
    let state = AppState { service, config };

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/session", post(session::create_session));

    // Ledger ownership routes
    let ledger_routes = Router::new()
        .route("/owner", get(ledger::get_owner))
        .route("/transfer-ownership", post(ledger::transfer_ownership));

    // Room routes
    let room_routes = Router::new()
        .route("/price", get(rooms::get_room_price))
        .route("/price", put(rooms::set_room_price))
        .route("/availability", get(rooms::get_available_rooms));

    // Booking routes
    let booking_routes = Router::new()
        .route("/", post(bookings::create_booking))
        .route("/:room_id", get(bookings::get_booking))
        .route("/:room_id/extend", post(bookings::extend_booking));

    // Treasury routes
    let treasury_routes = Router::new()
        .route("/balance", get(treasury::get_balance))
        .route("/withdraw", post(treasury::withdraw));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/ledger", ledger_routes)
        .nest("/rooms", room_routes)
        .nest("/bookings", booking_routes)
        .nest("/treasury", treasury_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
