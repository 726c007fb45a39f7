//! # Building Placement
//!
//! Fills every zone cell with building footprints, then appends the two
//! landmarks.
//!
//! ## Placement
//!
//! Each cell is walked on an 80-unit sub-grid, inset 10 units from the cell
//! edge. Every sub-grid point is a candidate; it becomes a building with
//! probability `density * 0.8`.
//!
//! ## Derived Attributes
//!
//! Height, kind and metadata are pure functions of position, zone and seed.
//! Only presence, garden, rotation and footprint come from the random
//! stream, drawn in that order. Industrial cells never draw for a garden.

use std::f64::consts::TAU;

use civitas_shared::{Building, BuildingKind, BuildingMeta, CityConfig, Zone, ZoneType};

use crate::grid::steps;
use crate::noise::NoiseField;
use crate::random::SeededRandom;

/// Id of the cultural center landmark.
pub const CULTURAL_CENTER_ID: &str = "cultural-center";

/// Id of the water treatment landmark.
pub const WATER_TREATMENT_ID: &str = "water-treatment";

/// Height of a building at `(x, y)` in a zone of type `zone`.
///
/// Base height by zone (commercial 8, residential 4, everything else 6)
/// plus up to ±4 of noise, rounded, never below 1.
#[must_use]
pub fn building_height(noise: &impl NoiseField, x: f64, y: f64, zone: ZoneType) -> f64 {
    let base = match zone {
        ZoneType::Commercial => 8.0,
        ZoneType::Residential => 4.0,
        ZoneType::Industrial | ZoneType::Civic | ZoneType::Green => 6.0,
    };
    let variation = noise.sample(
        x / BuildingGenerator::HEIGHT_NOISE_SCALE,
        y / BuildingGenerator::HEIGHT_NOISE_SCALE,
    );
    (base + variation * BuildingGenerator::HEIGHT_VARIATION)
        .round()
        .max(1.0)
}

/// Label for a grid building. Only the height matters.
#[must_use]
pub fn kind_for_height(height: f64) -> BuildingKind {
    if height <= 4.0 {
        BuildingKind::LowRise
    } else if height <= 12.0 {
        BuildingKind::MidRise
    } else {
        BuildingKind::HighRise
    }
}

/// Metadata profile for a grid building.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn meta_for(zone: ZoneType, height: f64) -> BuildingMeta {
    let per_floor = |factor: f64| (height * factor).floor() as u32;

    match zone {
        ZoneType::Residential => BuildingMeta::Residential {
            capacity: per_floor(2.0),
            energy_use: height * 100.0,
        },
        ZoneType::Commercial => BuildingMeta::Commercial {
            capacity: per_floor(5.0),
            energy_use: height * 200.0,
        },
        ZoneType::Civic => BuildingMeta::Civic {
            capacity: per_floor(10.0),
            staff: per_floor(2.0),
            energy_use: height * 150.0,
        },
        ZoneType::Industrial | ZoneType::Green => BuildingMeta::General {
            capacity: per_floor(3.0),
            energy_use: height * 120.0,
        },
    }
}

/// The two landmarks, placed relative to the city extent.
///
/// Fixed attributes, no random draws.
#[must_use]
pub fn landmarks(config: &CityConfig) -> [Building; 2] {
    [
        Building {
            id: CULTURAL_CENTER_ID.to_owned(),
            kind: BuildingKind::Cultural,
            position: [config.width / 2.0, 0.0, config.height / 2.0],
            rotation: 0.0,
            width: 60.0,
            depth: 80.0,
            height: 15.0,
            zone: ZoneType::Civic,
            has_vertical_garden: true,
            meta: BuildingMeta::Landmark {
                capacity: 2000,
                staff: 50,
                energy_use: 5000.0,
            },
        },
        Building {
            id: WATER_TREATMENT_ID.to_owned(),
            kind: BuildingKind::Industrial,
            position: [config.width * 0.2, 0.0, config.height * 0.8],
            rotation: 0.0,
            width: 80.0,
            depth: 60.0,
            height: 8.0,
            zone: ZoneType::Industrial,
            has_vertical_garden: false,
            meta: BuildingMeta::Landmark {
                capacity: 10_000,
                staff: 30,
                energy_use: 8000.0,
            },
        },
    ]
}

/// Populates zone cells with buildings.
pub struct BuildingGenerator {
    config: CityConfig,
}

impl BuildingGenerator {
    /// Sub-grid spacing inside a zone cell.
    pub const BLOCK_SIZE: f64 = 80.0;
    /// Margin between the cell edge and the first/last candidate.
    pub const INSET: f64 = 10.0;
    /// Placement probability is `density * PLACEMENT_FACTOR`.
    pub const PLACEMENT_FACTOR: f64 = 0.8;
    /// Chance of a vertical garden outside industrial zones.
    pub const GARDEN_PROBABILITY: f64 = 0.4;
    /// Footprint width/depth range.
    pub const FOOTPRINT_RANGE: (f64, f64) = (15.0, 30.0);
    /// World units per noise unit when sampling for height.
    pub const HEIGHT_NOISE_SCALE: f64 = 50.0;
    /// Maximum noise-driven deviation from the zone's base height.
    pub const HEIGHT_VARIATION: f64 = 4.0;

    /// Creates a generator for the given config.
    #[must_use]
    pub fn new(config: &CityConfig) -> Self {
        Self { config: *config }
    }

    /// Generates grid buildings for every zone in order, then the landmarks.
    ///
    /// Grid buildings get sequential ids `building-0`, `building-1`, …; the
    /// landmarks are always the last two entries.
    pub fn generate(
        &self,
        zones: &[Zone],
        rng: &mut SeededRandom,
        noise: &impl NoiseField,
    ) -> Vec<Building> {
        let mut buildings = Vec::new();

        for zone in zones {
            let lots = zone.bounds.inset(Self::INSET);
            let placement_probability = zone.density * Self::PLACEMENT_FACTOR;

            for x in steps(lots.x, lots.max_x(), Self::BLOCK_SIZE) {
                for y in steps(lots.y, lots.max_y(), Self::BLOCK_SIZE) {
                    if !rng.chance(placement_probability) {
                        continue;
                    }
                    let id = format!("building-{}", buildings.len());
                    buildings.push(Self::place(id, zone.zone_type, x, y, rng, noise));
                }
            }
        }

        buildings.extend(landmarks(&self.config));
        buildings
    }

    /// Builds one grid building at `(x, y)`.
    fn place(
        id: String,
        zone: ZoneType,
        x: f64,
        y: f64,
        rng: &mut SeededRandom,
        noise: &impl NoiseField,
    ) -> Building {
        let height = building_height(noise, x, y, zone);
        let has_vertical_garden =
            zone != ZoneType::Industrial && rng.chance(Self::GARDEN_PROBABILITY);
        let (min_side, max_side) = Self::FOOTPRINT_RANGE;
        let rotation = rng.random() * TAU;
        let width = rng.random_float(min_side, max_side);
        let depth = rng.random_float(min_side, max_side);

        Building {
            id,
            kind: kind_for_height(height),
            position: [x, 0.0, y],
            rotation,
            width,
            depth,
            height,
            zone,
            has_vertical_garden,
            meta: meta_for(zone, height),
        }
    }
}
