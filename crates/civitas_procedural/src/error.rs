//! # Generation Error Types
//!
//! Every error here is a caller-side problem. Generation is a pure function
//! of its config, so a failure recurs identically: retrying never helps.

use civitas_shared::{ConfigError, ZoneType};
use thiserror::Error;

/// Errors that can occur while generating a city.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The config was rejected before generation started.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A uniform choice was requested from an empty collection.
    #[error("cannot choose {context} from an empty collection")]
    EmptyChoice {
        /// What was being chosen.
        context: &'static str,
    },

    /// An integer range had its bounds reversed.
    #[error("invalid integer range: min {min} is greater than max {max}")]
    InvertedRange {
        /// Lower bound that was passed.
        min: i64,
        /// Upper bound that was passed.
        max: i64,
    },

    /// `generate` was called on a generator that already produced its city.
    #[error("city already generated; create a new generator for another draw")]
    AlreadyGenerated,

    /// The generated city was requested before `generate` ran.
    #[error("city has not been generated yet")]
    NotGenerated,

    /// A selection needed buildings of a zone type the city does not have.
    #[error("no {zone} buildings to select from")]
    MissingZoneType {
        /// The zone type with no members.
        zone: ZoneType,
    },
}

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenerationError>;
