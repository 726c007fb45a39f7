//! # Civitas Shared
//!
//! The city data model produced by `civitas_procedural` and read by
//! rendering and UI layers.
//!
//! ## Ownership
//!
//! The generator is the only writer. Everything here is a plain value type:
//! consumers iterate and copy, they never mutate a generated city in place.
//!
//! ## Entities
//!
//! - [`CityConfig`]: seed, extent and (informational) population
//! - [`Zone`]: one classified cell of the zone grid
//! - [`Road`]: a straight arterial or secondary segment
//! - [`Building`]: a footprint with derived height, kind and metadata
//! - [`Sensor`]: a scattered measurement point

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod building;
pub mod config;
pub mod error;
pub mod road;
pub mod sensor;
pub mod zone;

pub use building::{Building, BuildingKind, BuildingMeta};
pub use config::CityConfig;
pub use error::{ConfigError, ConfigResult};
pub use road::{Road, RoadType};
pub use sensor::{Sensor, SensorType};
pub use zone::{Bounds, Zone, ZoneType};

/// A planar coordinate `[x, y]` on the city ground plane.
pub type Point2 = [f64; 2];

/// A world-space coordinate `[x, y, z]`; `y` is the vertical axis.
///
/// Ground-plane `(x, y)` from [`Point2`] maps to `(x, _, z)` here.
pub type Point3 = [f64; 3];
