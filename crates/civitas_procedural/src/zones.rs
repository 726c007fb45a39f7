//! # Zone Grid
//!
//! Tiles the city with fixed 400-unit cells and classifies each one from
//! the noise field.
//!
//! ## Classification
//!
//! Thresholds are checked top-down, first match wins:
//!
//! | noise        | zone        |
//! |--------------|-------------|
//! | > 0.6        | commercial  |
//! | > 0.3        | residential |
//! | > 0.0        | industrial  |
//! | > -0.2       | green       |
//! | otherwise    | civic       |

use civitas_shared::{Bounds, CityConfig, Zone, ZoneType};

use crate::grid::steps;
use crate::noise::NoiseField;
use crate::random::SeededRandom;

/// Partitions the extent into classified zone cells.
pub struct ZoneGenerator {
    width: f64,
    height: f64,
}

impl ZoneGenerator {
    /// Edge length of every zone cell.
    pub const CELL_SIZE: f64 = 400.0;
    /// World units per noise unit when sampling for classification.
    pub const NOISE_SCALE: f64 = 1000.0;
    /// Lowest density a cell can draw.
    pub const MIN_DENSITY: f64 = 0.3;
    /// Upper bound of the density draw.
    pub const MAX_DENSITY: f64 = 1.0;

    /// Creates a generator for the config's extent.
    #[must_use]
    pub fn new(config: &CityConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }

    /// Maps a noise value to a zone type.
    #[must_use]
    pub fn classify(noise_value: f64) -> ZoneType {
        if noise_value > 0.6 {
            ZoneType::Commercial
        } else if noise_value > 0.3 {
            ZoneType::Residential
        } else if noise_value > 0.0 {
            ZoneType::Industrial
        } else if noise_value > -0.2 {
            ZoneType::Green
        } else {
            ZoneType::Civic
        }
    }

    /// Generates the zone grid.
    ///
    /// Cells are emitted x-major (all cells of the first column, top to
    /// bottom, then the next column). Each cell draws one density value.
    ///
    /// Cells always have the full [`Self::CELL_SIZE`]; when the extent is
    /// not a multiple of it, the last column and row overhang the extent.
    pub fn generate(&self, rng: &mut SeededRandom, noise: &impl NoiseField) -> Vec<Zone> {
        let mut zones = Vec::new();

        for x in steps(0.0, self.width, Self::CELL_SIZE) {
            for y in steps(0.0, self.height, Self::CELL_SIZE) {
                let zone_noise = noise.sample(x / Self::NOISE_SCALE, y / Self::NOISE_SCALE);

                zones.push(Zone {
                    zone_type: Self::classify(zone_noise),
                    bounds: Bounds::new(x, y, Self::CELL_SIZE, Self::CELL_SIZE),
                    density: rng.random_float(Self::MIN_DENSITY, Self::MAX_DENSITY),
                });
            }
        }

        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::SimplexNoise;
    use crate::random::CitySeed;

    struct ConstantNoise(f64);

    impl NoiseField for ConstantNoise {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    fn config(width: f64, height: f64) -> CityConfig {
        CityConfig::new(1, width, height, 0).expect("valid config")
    }

    #[test]
    fn test_threshold_policy() {
        assert_eq!(ZoneGenerator::classify(1.0), ZoneType::Commercial);
        assert_eq!(ZoneGenerator::classify(0.61), ZoneType::Commercial);
        assert_eq!(ZoneGenerator::classify(0.6), ZoneType::Residential);
        assert_eq!(ZoneGenerator::classify(0.31), ZoneType::Residential);
        assert_eq!(ZoneGenerator::classify(0.3), ZoneType::Industrial);
        assert_eq!(ZoneGenerator::classify(0.01), ZoneType::Industrial);
        assert_eq!(ZoneGenerator::classify(0.0), ZoneType::Green);
        assert_eq!(ZoneGenerator::classify(-0.19), ZoneType::Green);
        assert_eq!(ZoneGenerator::classify(-0.2), ZoneType::Civic);
        assert_eq!(ZoneGenerator::classify(-1.0), ZoneType::Civic);
    }

    #[test]
    fn test_grid_order_and_tiling() {
        let mut rng = SeededRandom::new(CitySeed::new(1));
        let zones = ZoneGenerator::new(&config(1200.0, 800.0))
            .generate(&mut rng, &ConstantNoise(0.5));

        let origins: Vec<(f64, f64)> = zones.iter().map(|z| (z.bounds.x, z.bounds.y)).collect();
        assert_eq!(
            origins,
            [
                (0.0, 0.0),
                (0.0, 400.0),
                (400.0, 0.0),
                (400.0, 400.0),
                (800.0, 0.0),
                (800.0, 400.0)
            ]
        );

        let area: f64 = zones.iter().map(|z| z.bounds.area()).sum();
        assert_eq!(area, 1200.0 * 800.0);
        assert!(zones.iter().all(|z| z.zone_type == ZoneType::Residential));
    }

    #[test]
    fn test_partial_extent_overhangs() {
        let mut rng = SeededRandom::new(CitySeed::new(1));
        let zones = ZoneGenerator::new(&config(500.0, 300.0))
            .generate(&mut rng, &ConstantNoise(0.0));

        assert_eq!(zones.len(), 2);
        assert!(zones.iter().all(|z| z.bounds.width == 400.0));
        assert_eq!(zones[1].bounds.x, 400.0);
    }

    #[test]
    fn test_density_range() {
        let mut rng = SeededRandom::new(CitySeed::new(8));
        let noise = SimplexNoise::new(CitySeed::new(8));
        let zones = ZoneGenerator::new(&config(8000.0, 8000.0)).generate(&mut rng, &noise);

        assert_eq!(zones.len(), 400);
        for zone in zones {
            assert!((0.3..=1.0).contains(&zone.density), "{}", zone.density);
        }
    }

    #[test]
    fn test_one_draw_per_cell() {
        let mut rng = SeededRandom::new(CitySeed::new(4));
        let mut reference = SeededRandom::new(CitySeed::new(4));

        let zones = ZoneGenerator::new(&config(2000.0, 2000.0))
            .generate(&mut rng, &ConstantNoise(-0.5));
        for _ in 0..zones.len() {
            let _ = reference.random();
        }

        assert_eq!(rng.random().to_bits(), reference.random().to_bits());
    }
}
