//! # Configuration Error Types

use thiserror::Error;

/// Errors raised while building or loading a [`crate::CityConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero or negative.
    #[error("city {axis} must be positive, got {value}")]
    NonPositiveExtent {
        /// Which dimension was rejected ("width" or "height").
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Width or height is NaN or infinite.
    #[error("city {axis} must be a finite number")]
    NonFiniteExtent {
        /// Which dimension was rejected ("width" or "height").
        axis: &'static str,
    },

    /// The TOML document could not be parsed into a config.
    #[error("invalid city config: {0}")]
    Parse(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
