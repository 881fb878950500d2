//! API and ledger configuration

use serde::Deserialize;
use uuid::Uuid;

use core_kernel::{AccountId, Currency, Money, MoneyError};
use domain_booking::BookingConfig;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for session tokens
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment variables with the `API_` prefix
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Deployment-time ledger parameters
///
/// Room count and currency are fixed for the life of the process; only the
/// price can change afterwards, through the owner-gated operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LedgerSettings {
    /// Number of rooms in the fixed inventory
    pub room_count: u16,
    /// Initial per-day price in base units
    pub initial_price_base_units: u64,
    /// Settlement currency
    pub currency: Currency,
    /// Owner account; a fresh identity is generated when absent
    pub owner: Option<Uuid>,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            room_count: 20,
            initial_price_base_units: 75_000_000_000_000_000, // 0.075 native units
            currency: Currency::Eth,
            owner: None,
        }
    }
}

impl LedgerSettings {
    /// Loads settings from environment variables with the `LEDGER_` prefix
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LEDGER").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Builds the domain configuration, minting an owner if none was set
    pub fn to_booking_config(&self) -> Result<BookingConfig, MoneyError> {
        Ok(BookingConfig {
            room_count: self.room_count,
            price_per_day: Money::from_base_units(
                i128::from(self.initial_price_base_units),
                self.currency,
            )?,
            owner: self
                .owner
                .map(AccountId::from_uuid)
                .unwrap_or_else(AccountId::new),
        })
    }
}
