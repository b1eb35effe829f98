use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Seats per showing when `SEAT_CAPACITY` is not set.
pub const DEFAULT_SEAT_CAPACITY: u32 = 20;

/// Largest accepted `SEAT_CAPACITY`; every showing allocates a table this size.
pub const MAX_SEAT_CAPACITY: u32 = 1_000;

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub booking: BookingConfig,
    pub catalog: CatalogConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Seat map settings
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    pub seat_capacity: u32,
}

// Startup catalog; `None` means the built-in seed
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub seed_path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("SEAT_CAPACITY must be at least 1")]
    ZeroCapacity,

    #[error("SEAT_CAPACITY must not exceed {max}")]
    CapacityTooLarge { max: u32 },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let seat_capacity = match env::var("SEAT_CAPACITY") {
            Ok(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber { name: "SEAT_CAPACITY", value })?,
            Err(_) => DEFAULT_SEAT_CAPACITY,
        };

        if seat_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if seat_capacity > MAX_SEAT_CAPACITY {
            return Err(ConfigError::CapacityTooLarge { max: MAX_SEAT_CAPACITY });
        }

        Ok(Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_booking=warn".to_string()),
            },
            booking: BookingConfig { seat_capacity },
            catalog: CatalogConfig {
                seed_path: env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty()),
            },
        })
    }

    /// Config with the built-in catalog and the given capacity, ignoring the environment.
    pub fn with_capacity(seat_capacity: u32) -> Self {
        Config {
            app: AppConfig {
                environment: "test".to_string(),
                rust_log: "cinema_booking=debug".to_string(),
            },
            booking: BookingConfig { seat_capacity },
            catalog: CatalogConfig { seed_path: None },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SEAT_CAPACITY)
    }
}
