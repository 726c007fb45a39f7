//! # City Configuration
//!
//! The only external tunables: a seed and the city extent.
//!
//! Configs are validated once, on construction or load. A validated config
//! is never changed while a city is being generated from it.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Parameters for one city generation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityConfig {
    /// Seed that fully determines every randomized value of the city.
    pub seed: u64,
    /// Extent along the x axis, in world units.
    pub width: f64,
    /// Extent along the ground-plane y axis (world z), in world units.
    pub height: f64,
    /// Target population.
    ///
    /// Informational only: generation does not read it.
    pub population: u32,
}

impl CityConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` or `height` is not a positive finite number.
    pub fn new(seed: u64, width: f64, height: f64, population: u32) -> ConfigResult<Self> {
        let config = Self {
            seed,
            width,
            height,
            population,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a config from a TOML document.
    ///
    /// ```toml
    /// seed = 12345
    /// width = 2000.0
    /// height = 2000.0
    /// population = 10000
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or missing fields,
    /// and the usual extent errors for out-of-range dimensions.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the extent invariants.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending dimension.
    pub fn validate(&self) -> ConfigResult<()> {
        Self::check_extent("width", self.width)?;
        Self::check_extent("height", self.height)
    }

    fn check_extent(axis: &'static str, value: f64) -> ConfigResult<()> {
        if !value.is_finite() {
            return Err(ConfigError::NonFiniteExtent { axis });
        }
        if value <= 0.0 {
            return Err(ConfigError::NonPositiveExtent { axis, value });
        }
        Ok(())
    }
}

impl Default for CityConfig {
    /// The showcase city: seed 12345 on a 2000 x 2000 extent.
    fn default() -> Self {
        Self {
            seed: 12345,
            width: 2000.0,
            height: 2000.0,
            population: 10_000,
        }
    }
}
