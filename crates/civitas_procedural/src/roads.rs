//! # Road Network
//!
//! Arterials span the whole city; secondaries are short infill segments on
//! a 100-unit grid.
//!
//! Segments may cross without being split. Roads are rendering geometry and
//! loose routing hints, not a connectivity graph. [`RoadType::Pedestrian`]
//! is never produced here.

use civitas_shared::{CityConfig, Road, RoadType};

use crate::error::GenResult;
use crate::grid::steps;
use crate::random::SeededRandom;

/// Generates arterial and secondary road segments over the city extent.
pub struct RoadNetworkGenerator {
    width: f64,
    height: f64,
}

impl RoadNetworkGenerator {
    /// Fewest arterials per city.
    pub const MIN_ARTERIALS: i64 = 3;
    /// Most arterials per city.
    pub const MAX_ARTERIALS: i64 = 5;
    /// Arterial carriageway width.
    pub const ARTERIAL_WIDTH: f64 = 20.0;
    /// Arterials are placed within this fraction of the extent.
    pub const ARTERIAL_BAND: (f64, f64) = (0.2, 0.8);

    /// Spacing of the secondary grid; also the length of each secondary.
    pub const BLOCK_SIZE: f64 = 100.0;
    /// Secondary carriageway width.
    pub const SECONDARY_WIDTH: f64 = 12.0;
    /// Chance of each secondary segment at a grid intersection.
    pub const SECONDARY_PROBABILITY: f64 = 0.7;

    /// Creates a generator for the config's extent.
    #[must_use]
    pub fn new(config: &CityConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }

    /// Generates the road network.
    ///
    /// Draw order: arterial count, one position per horizontal arterial,
    /// one per vertical arterial, then two trials per grid intersection
    /// (vertical segment first) in x-major order.
    ///
    /// # Errors
    ///
    /// Propagates random-stream precondition failures.
    pub fn generate(&self, rng: &mut SeededRandom) -> GenResult<Vec<Road>> {
        let mut roads = Vec::new();

        let arterials = rng.random_int(Self::MIN_ARTERIALS, Self::MAX_ARTERIALS)?;
        let horizontal = arterials / 2;
        let vertical = arterials - horizontal;
        let (band_min, band_max) = Self::ARTERIAL_BAND;

        for _ in 0..horizontal {
            let y = rng.random_float(band_min, band_max) * self.height;
            roads.push(Road::new(
                RoadType::Arterial,
                [0.0, y],
                [self.width, y],
                Self::ARTERIAL_WIDTH,
            ));
        }

        for _ in 0..vertical {
            let x = rng.random_float(band_min, band_max) * self.width;
            roads.push(Road::new(
                RoadType::Arterial,
                [x, 0.0],
                [x, self.height],
                Self::ARTERIAL_WIDTH,
            ));
        }

        let half = Self::BLOCK_SIZE / 2.0;
        for x in steps(Self::BLOCK_SIZE, self.width, Self::BLOCK_SIZE) {
            for y in steps(Self::BLOCK_SIZE, self.height, Self::BLOCK_SIZE) {
                if rng.chance(Self::SECONDARY_PROBABILITY) {
                    roads.push(Road::new(
                        RoadType::Secondary,
                        [x, y - half],
                        [x, y + half],
                        Self::SECONDARY_WIDTH,
                    ));
                }
                if rng.chance(Self::SECONDARY_PROBABILITY) {
                    roads.push(Road::new(
                        RoadType::Secondary,
                        [x - half, y],
                        [x + half, y],
                        Self::SECONDARY_WIDTH,
                    ));
                }
            }
        }

        Ok(roads)
    }
}
