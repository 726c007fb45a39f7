//! # Buildings
//!
//! Building footprints placed on the zone grid, plus the fixed landmarks.

use serde::{Deserialize, Serialize};

use crate::zone::ZoneType;
use crate::{Point2, Point3};

/// Building label.
///
/// Grid buildings are labelled from their height alone; the two landmarks
/// carry their own labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    /// Height up to 4.
    #[serde(rename = "low-rise")]
    LowRise,
    /// Height up to 12.
    #[serde(rename = "mid-rise")]
    MidRise,
    /// Taller than 12.
    #[serde(rename = "high-rise")]
    HighRise,
    /// The cultural center landmark.
    #[serde(rename = "cultural")]
    Cultural,
    /// The water treatment landmark.
    #[serde(rename = "industrial")]
    Industrial,
}

impl BuildingKind {
    /// Returns the label used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowRise => "low-rise",
            Self::MidRise => "mid-rise",
            Self::HighRise => "high-rise",
            Self::Cultural => "cultural",
            Self::Industrial => "industrial",
        }
    }
}

/// Occupancy and energy profile of a building.
///
/// Which variant a building carries depends on its zone; every variant has
/// exactly the fields its profile defines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "lowercase")]
pub enum BuildingMeta {
    /// Housing profile.
    Residential {
        /// Resident capacity.
        capacity: u32,
        /// Energy use per tick.
        #[serde(rename = "energyUse")]
        energy_use: f64,
    },
    /// Shops and offices profile.
    Commercial {
        /// Occupant capacity.
        capacity: u32,
        /// Energy use per tick.
        #[serde(rename = "energyUse")]
        energy_use: f64,
    },
    /// Public institution profile.
    Civic {
        /// Visitor capacity.
        capacity: u32,
        /// Staff headcount.
        staff: u32,
        /// Energy use per tick.
        #[serde(rename = "energyUse")]
        energy_use: f64,
    },
    /// Shared profile for industrial and green zones.
    General {
        /// Occupant capacity.
        capacity: u32,
        /// Energy use per tick.
        #[serde(rename = "energyUse")]
        energy_use: f64,
    },
    /// Hand-authored landmark profile.
    Landmark {
        /// Visitor or throughput capacity.
        capacity: u32,
        /// Staff headcount.
        staff: u32,
        /// Energy use per tick.
        #[serde(rename = "energyUse")]
        energy_use: f64,
    },
}

impl BuildingMeta {
    /// Capacity of the building.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        match *self {
            Self::Residential { capacity, .. }
            | Self::Commercial { capacity, .. }
            | Self::Civic { capacity, .. }
            | Self::General { capacity, .. }
            | Self::Landmark { capacity, .. } => capacity,
        }
    }

    /// Staff headcount, for profiles that have one.
    #[must_use]
    pub const fn staff(&self) -> Option<u32> {
        match *self {
            Self::Civic { staff, .. } | Self::Landmark { staff, .. } => Some(staff),
            Self::Residential { .. } | Self::Commercial { .. } | Self::General { .. } => None,
        }
    }

    /// Energy use of the building.
    #[must_use]
    pub fn energy_use(&self) -> f64 {
        match *self {
            Self::Residential { energy_use, .. }
            | Self::Commercial { energy_use, .. }
            | Self::Civic { energy_use, .. }
            | Self::General { energy_use, .. }
            | Self::Landmark { energy_use, .. } => energy_use,
        }
    }
}

/// A placed building.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Unique id (`building-<n>` for grid buildings).
    pub id: String,
    /// Label.
    #[serde(rename = "type")]
    pub kind: BuildingKind,
    /// Footprint center; `position[1]` is always ground level.
    pub position: Point3,
    /// Yaw in radians, in `[0, 2π)`.
    pub rotation: f64,
    /// Footprint extent along the local x axis.
    pub width: f64,
    /// Footprint extent along the local z axis.
    pub depth: f64,
    /// Height in floors, at least 1.
    pub height: f64,
    /// Zone the building belongs to.
    pub zone: ZoneType,
    /// Whether a planted facade is attached.
    #[serde(rename = "hasVerticalGarden")]
    pub has_vertical_garden: bool,
    /// Occupancy and energy profile.
    pub meta: BuildingMeta,
}

impl Building {
    /// Ground-plane `(x, y)` of the footprint center.
    #[inline]
    #[must_use]
    pub const fn ground_position(&self) -> Point2 {
        [self.position[0], self.position[2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_accessors() {
        let civic = BuildingMeta::Civic {
            capacity: 60,
            staff: 12,
            energy_use: 900.0,
        };
        assert_eq!(civic.capacity(), 60);
        assert_eq!(civic.staff(), Some(12));
        assert_eq!(civic.energy_use(), 900.0);

        let home = BuildingMeta::Residential {
            capacity: 8,
            energy_use: 400.0,
        };
        assert_eq!(home.staff(), None);
    }

    fn residential() -> Building {
        Building {
            id: "building-0".to_owned(),
            kind: BuildingKind::LowRise,
            position: [410.0, 0.0, 810.0],
            rotation: 1.5,
            width: 20.0,
            depth: 25.0,
            height: 3.0,
            zone: ZoneType::Residential,
            has_vertical_garden: true,
            meta: BuildingMeta::Residential {
                capacity: 6,
                energy_use: 300.0,
            },
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let out = toml::to_string(&residential()).expect("serialize");

        assert!(out.contains("type = \"low-rise\""), "{out}");
        assert!(out.contains("hasVerticalGarden = true"), "{out}");
        assert!(out.contains("energyUse = 300.0"), "{out}");
        assert!(out.contains("profile = \"residential\""), "{out}");
        assert!(!out.contains("has_vertical_garden"), "{out}");
        assert!(!out.contains("energy_use"), "{out}");
    }

    #[test]
    fn test_serialized_landmark_meta() {
        let landmark = BuildingMeta::Landmark {
            capacity: 2000,
            staff: 50,
            energy_use: 5000.0,
        };
        let out = toml::to_string(&landmark).expect("serialize");

        assert!(out.contains("energyUse = 5000.0"), "{out}");
        assert!(out.contains("staff = 50"), "{out}");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(BuildingKind::LowRise.as_str(), "low-rise");
        assert_eq!(BuildingKind::HighRise.as_str(), "high-rise");
        assert_eq!(BuildingKind::Cultural.as_str(), "cultural");
    }
}
