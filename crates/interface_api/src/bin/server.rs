//! Booking Ledger - API Server Binary
//!
//! Starts the HTTP API server over an in-memory booking ledger.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (20 rooms at 0.075/day)
//! cargo run --bin booking-api
//!
//! # Run with environment variables
//! API_PORT=8080 LEDGER_ROOM_COUNT=20 cargo run --bin booking-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_JWT_SECRET` - Session token signing secret (required in production)
//! * `API_JWT_EXPIRATION_SECS` - Session token expiration (default: 3600)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error
//! * `LEDGER_ROOM_COUNT` - Fixed room inventory size (default: 20)
//! * `LEDGER_INITIAL_PRICE_BASE_UNITS` - Per-day price (default: 75000000000000000)
//! * `LEDGER_CURRENCY` - Settlement currency: ETH or MATIC (default: ETH)
//! * `LEDGER_OWNER` - Owner account UUID; generated and logged when unset

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_booking::BookingService;
use interface_api::config::{ApiConfig, LedgerSettings};
use interface_api::create_router;

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, builds the in-memory ledger,
/// and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().unwrap_or_default();
    let settings = LedgerSettings::from_env().unwrap_or_default();

    init_tracing(&config.log_level);

    let booking_config = settings.to_booking_config()?;
    tracing::info!(
        host = %config.host,
        port = %config.port,
        rooms = booking_config.room_count,
        price = %booking_config.price_per_day,
        owner = %booking_config.owner,
        "Starting booking ledger API server"
    );

    let service = Arc::new(BookingService::new(booking_config));
    let app = create_router(service, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
