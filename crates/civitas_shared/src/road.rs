//! # Roads
//!
//! Straight road segments. Segments are decorative geometry and loose
//! routing guidance: crossings are not split into nodes.

use serde::{Deserialize, Serialize};

use crate::Point2;

/// Road classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    /// Full-span primary road.
    Arterial,
    /// Short grid-infill street.
    Secondary,
    /// Footpath.
    ///
    /// Part of the type domain for consumers; the generator never emits it.
    Pedestrian,
}

impl RoadType {
    /// Returns the lowercase name used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arterial => "arterial",
            Self::Secondary => "secondary",
            Self::Pedestrian => "pedestrian",
        }
    }
}

/// A straight road segment from `points[0]` to `points[1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Classification.
    #[serde(rename = "type")]
    pub road_type: RoadType,
    /// Segment endpoints `[start, end]`.
    pub points: [Point2; 2],
    /// Carriageway width in world units.
    pub width: f64,
}

impl Road {
    /// Creates a segment.
    #[inline]
    #[must_use]
    pub const fn new(road_type: RoadType, start: Point2, end: Point2, width: f64) -> Self {
        Self {
            road_type,
            points: [start, end],
            width,
        }
    }

    /// Segment start.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Segment end.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Point2 {
        self.points[1]
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        let [sx, sy] = self.start();
        let [ex, ey] = self.end();
        (ex - sx).hypot(ey - sy)
    }

    /// Heading of the segment in radians, as `atan2(dy, dx)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let [sx, sy] = self.start();
        let [ex, ey] = self.end();
        (ey - sy).atan2(ex - sx)
    }

    /// Center point of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        let [sx, sy] = self.start();
        let [ex, ey] = self.end();
        [(sx + ex) * 0.5, (sy + ey) * 0.5]
    }
}
