//! # Zones
//!
//! Classified rectangular cells of the city grid.

use serde::{Deserialize, Serialize};

/// Land-use classification of a zone cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ZoneType {
    /// Housing.
    Residential = 0,
    /// Shops and offices.
    Commercial = 1,
    /// Plants and warehouses.
    Industrial = 2,
    /// Public institutions.
    Civic = 3,
    /// Parks.
    Green = 4,
}

impl ZoneType {
    /// Every zone type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Residential,
        Self::Commercial,
        Self::Industrial,
        Self::Civic,
        Self::Green,
    ];

    /// Returns the lowercase name used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Civic => "civic",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum x.
    pub x: f64,
    /// Minimum ground-plane y.
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along ground-plane y.
    pub height: f64,
}

impl Bounds {
    /// Creates a rectangle from its minimum corner and size.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Maximum x (exclusive edge).
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Maximum ground-plane y (exclusive edge).
    #[inline]
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment test: `[x, max_x) x [y, max_y)`.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.max_x() && y >= self.y && y < self.max_y()
    }

    /// Returns these bounds shrunk by `margin` on every side.
    #[must_use]
    pub fn inset(&self, margin: f64) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - 2.0 * margin,
            height: self.height - 2.0 * margin,
        }
    }

    /// Area of the rectangle.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One classified cell of the zone grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Land-use classification.
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Cell rectangle.
    pub bounds: Bounds,
    /// Building density in `[0.3, 1.0]`.
    pub density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_half_open() {
        let bounds = Bounds::new(0.0, 0.0, 400.0, 400.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(399.9, 399.9));
        assert!(!bounds.contains(400.0, 10.0));
        assert!(!bounds.contains(10.0, 400.0));
        assert!(!bounds.contains(-0.1, 10.0));
    }

    #[test]
    fn test_inset() {
        let inner = Bounds::new(400.0, 800.0, 400.0, 400.0).inset(10.0);
        assert_eq!(inner, Bounds::new(410.0, 810.0, 380.0, 380.0));
        assert_eq!(inner.max_x(), 790.0);
    }

    #[test]
    fn test_zone_type_names() {
        let names: Vec<&str> = ZoneType::ALL.iter().map(|z| z.as_str()).collect();
        assert_eq!(
            names,
            ["residential", "commercial", "industrial", "civic", "green"]
        );
        assert_eq!(ZoneType::Green.to_string(), "green");
    }
}
