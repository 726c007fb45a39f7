//! # Civitas Procedural Generation
//!
//! Deterministic city generation from a single integer seed.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and config always produce the same city,
//!    bit for bit, on every platform
//! 2. **Staged**: roads -> zones -> buildings -> sensors, always in that order
//! 3. **Single stream**: every stage draws from one owned [`SeededRandom`],
//!    threaded through by reference; there is no global generator
//! 4. **Single-threaded**: parallel stages would reorder draws
//!
//! ## Core Components
//!
//! - [`SeededRandom`]: uniform draws from a `ChaCha8` stream
//! - [`SimplexNoise`]: the [`NoiseField`] used for zoning and heights
//! - [`RoadNetworkGenerator`], [`ZoneGenerator`], [`BuildingGenerator`],
//!   [`SensorGenerator`]: the four stages
//! - [`CityGenerator`]: owns the stream and noise, runs the stages once
//! - [`CityStats`], [`CommutePlanner`]: read-only views over a finished city
//!
//! ## Example
//!
//! ```rust,ignore
//! use civitas_procedural::{CityConfig, CityGenerator};
//!
//! let mut generator = CityGenerator::new(CityConfig::default())?;
//! let city = generator.generate()?;
//!
//! assert_eq!(city.buildings()[0].id, "building-0");
//! assert_eq!(city.sensors().len(), 50);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buildings;
pub mod city;
pub mod commute;
pub mod error;
mod grid;
pub mod noise;
pub mod random;
pub mod roads;
pub mod sensors;
pub mod stats;
pub mod zones;

pub use buildings::{BuildingGenerator, CULTURAL_CENTER_ID, WATER_TREATMENT_ID};
pub use city::{generate_city, City, CityGenerator, GeneratorState};
pub use civitas_shared::{
    Bounds, Building, BuildingKind, BuildingMeta, CityConfig, ConfigError, Road, RoadType,
    Sensor, SensorType, Zone, ZoneType,
};
pub use commute::{Commute, CommutePlanner, TravelMode};
pub use error::{GenResult, GenerationError};
pub use noise::{NoiseField, SimplexNoise};
pub use random::{CitySeed, SeededRandom};
pub use roads::RoadNetworkGenerator;
pub use sensors::SensorGenerator;
pub use stats::CityStats;
pub use zones::ZoneGenerator;
