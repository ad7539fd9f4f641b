//! Configuration and input validation errors.

use thiserror::Error;

/// Rejected configuration or observer position.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    #[error("invalid position: latitude {latitude_deg}°, longitude {longitude_deg}°")]
    InvalidPosition { latitude_deg: f64, longitude_deg: f64 },
}
