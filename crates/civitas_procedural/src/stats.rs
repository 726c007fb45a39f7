//! # City Statistics
//!
//! Summary figures over a generated city, for overlays and reports.

use civitas_shared::ZoneType;

use crate::city::City;

/// Summary of a generated city.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CityStats {
    /// All buildings, landmarks included.
    pub total_buildings: usize,
    /// Buildings in residential zones.
    pub residential: usize,
    /// Buildings in commercial zones.
    pub commercial: usize,
    /// Buildings with a vertical garden.
    pub vertical_gardens: usize,
    /// `residential * 20 + commercial * 10`.
    pub estimated_population: usize,
    /// Zone cell counts, indexed by `ZoneType as usize`.
    pub zone_counts: [usize; 5],
    /// Summed length of every road segment.
    pub total_road_length: f64,
}

impl CityStats {
    /// Residents assumed per residential building.
    pub const RESIDENTS_PER_HOME: usize = 20;
    /// Residents attributed per commercial building.
    pub const RESIDENTS_PER_WORKPLACE: usize = 10;

    /// Computes statistics for `city`.
    #[must_use]
    pub fn from_city(city: &City) -> Self {
        let mut stats = Self {
            total_buildings: city.buildings().len(),
            ..Self::default()
        };

        for building in city.buildings() {
            match building.zone {
                ZoneType::Residential => stats.residential += 1,
                ZoneType::Commercial => stats.commercial += 1,
                ZoneType::Industrial | ZoneType::Civic | ZoneType::Green => {}
            }
            if building.has_vertical_garden {
                stats.vertical_gardens += 1;
            }
        }

        for zone in city.zones() {
            stats.zone_counts[zone.zone_type as usize] += 1;
        }

        stats.total_road_length = city.roads().iter().map(|road| road.length()).sum();
        stats.estimated_population = stats.residential * Self::RESIDENTS_PER_HOME
            + stats.commercial * Self::RESIDENTS_PER_WORKPLACE;
        stats
    }

    /// Number of zone cells of type `zone`.
    #[must_use]
    pub const fn zones_of(&self, zone: ZoneType) -> usize {
        self.zone_counts[zone as usize]
    }
}
