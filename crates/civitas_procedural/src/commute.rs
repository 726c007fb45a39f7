//! # Commute Selection
//!
//! Picks home/work pairs for agent layers that animate a generated city.
//! Only the selection lives here; moving agents along their commute is the
//! consumer's job.
//!
//! The planner owns its own stream, seeded from a sub-seed of the city
//! seed, so planning commutes never disturbs city generation.

use civitas_shared::{Building, Point3, ZoneType};

use crate::city::City;
use crate::error::{GenResult, GenerationError};
use crate::random::{CitySeed, SeededRandom};

/// How an agent travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TravelMode {
    /// On foot.
    Pedestrian,
    /// By car.
    Vehicle,
}

/// One agent's daily trip.
#[derive(Clone, Debug, PartialEq)]
pub struct Commute {
    /// Id of the residential building the agent lives in.
    pub home_id: String,
    /// Id of the commercial building the agent works in.
    pub work_id: String,
    /// Start point, inside the home footprint.
    pub origin: Point3,
    /// End point, inside the workplace footprint.
    pub destination: Point3,
    /// Travel mode.
    pub mode: TravelMode,
    /// Movement speed in `[0.5, 2.0)`.
    pub speed: f64,
}

/// Deterministic home/work selection over a generated city.
pub struct CommutePlanner {
    rng: SeededRandom,
}

impl CommutePlanner {
    /// Sub-seed purpose tag for the planner stream.
    pub const SEED_PURPOSE: u64 = 0xC033_07E0;
    /// Chance an agent drives.
    pub const VEHICLE_PROBABILITY: f64 = 0.3;
    /// Speed range.
    pub const SPEED_RANGE: (f64, f64) = (0.5, 2.0);
    /// Height of agent endpoints above ground.
    pub const AGENT_HEIGHT: f64 = 1.0;

    /// Creates a planner for a city generated from `seed`.
    #[must_use]
    pub fn new(seed: CitySeed) -> Self {
        Self {
            rng: SeededRandom::new(seed.derive(Self::SEED_PURPOSE)),
        }
    }

    /// Creates a planner seeded from the city's own config.
    #[must_use]
    pub fn for_city(city: &City) -> Self {
        Self::new(CitySeed::new(city.config().seed))
    }

    /// Plans `count` commutes.
    ///
    /// Homes are drawn uniformly from residential buildings and workplaces
    /// from commercial buildings.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::MissingZoneType`] if the city has no
    /// residential or no commercial buildings, even when `count` is 0.
    pub fn plan(&mut self, city: &City, count: usize) -> GenResult<Vec<Commute>> {
        let homes = Self::buildings_in(city, ZoneType::Residential)?;
        let workplaces = Self::buildings_in(city, ZoneType::Commercial)?;

        let mut commutes = Vec::with_capacity(count);
        for _ in 0..count {
            let home = *self.rng.choice(&homes, "home")?;
            let work = *self.rng.choice(&workplaces, "workplace")?;
            let origin = self.point_in(home);
            let destination = self.point_in(work);
            let (min_speed, max_speed) = Self::SPEED_RANGE;
            let speed = self.rng.random_float(min_speed, max_speed);
            let mode = if self.rng.chance(Self::VEHICLE_PROBABILITY) {
                TravelMode::Vehicle
            } else {
                TravelMode::Pedestrian
            };

            commutes.push(Commute {
                home_id: home.id.clone(),
                work_id: work.id.clone(),
                origin,
                destination,
                mode,
                speed,
            });
        }

        Ok(commutes)
    }

    fn buildings_in(city: &City, zone: ZoneType) -> GenResult<Vec<&Building>> {
        let members: Vec<&Building> = city
            .buildings()
            .iter()
            .filter(|building| building.zone == zone)
            .collect();

        if members.is_empty() {
            return Err(GenerationError::MissingZoneType { zone });
        }
        Ok(members)
    }

    /// Random point within the building's axis-aligned footprint.
    fn point_in(&mut self, building: &Building) -> Point3 {
        let [x, y] = building.ground_position();
        [
            x + (self.rng.random() - 0.5) * building.width,
            Self::AGENT_HEIGHT,
            y + (self.rng.random() - 0.5) * building.depth,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::generate_city;
    use civitas_shared::CityConfig;

    fn city() -> City {
        (0..200)
            .map(|seed| {
                let config = CityConfig::new(seed, 4000.0, 4000.0, 0).expect("valid config");
                generate_city(config).expect("city")
            })
            .find(|city| {
                let has = |zone| city.buildings().iter().any(|b| b.zone == zone);
                has(ZoneType::Residential) && has(ZoneType::Commercial)
            })
            .expect("some seed yields homes and workplaces")
    }

    #[test]
    fn test_plan_is_deterministic() {
        let city = city();
        let a = CommutePlanner::for_city(&city).plan(&city, 40);
        let b = CommutePlanner::for_city(&city).plan(&city, 40);
        assert_eq!(a, b);
    }

    #[test]
    fn test_endpoints_match_zones() {
        let city = city();
        let commutes = CommutePlanner::for_city(&city)
            .plan(&city, 100)
            .expect("both zone types present");
        assert_eq!(commutes.len(), 100);

        for commute in &commutes {
            let home = city
                .buildings()
                .iter()
                .find(|b| b.id == commute.home_id)
                .expect("home exists");
            let work = city
                .buildings()
                .iter()
                .find(|b| b.id == commute.work_id)
                .expect("work exists");

            assert_eq!(home.zone, ZoneType::Residential);
            assert_eq!(work.zone, ZoneType::Commercial);
            assert!((commute.origin[0] - home.position[0]).abs() <= home.width / 2.0);
            assert!((commute.origin[2] - home.position[2]).abs() <= home.depth / 2.0);
            assert_eq!(commute.origin[1], 1.0);
            assert!((0.5..2.0).contains(&commute.speed));
        }
    }

    #[test]
    fn test_missing_zone_type_is_error() {
        // One 400-unit cell: at most one zone type, so residential and
        // commercial cannot both be present.
        let config = CityConfig::new(3, 400.0, 400.0, 0).expect("valid config");
        let city = generate_city(config).expect("city");

        let result = CommutePlanner::for_city(&city).plan(&city, 1);
        assert!(matches!(
            result,
            Err(GenerationError::MissingZoneType {
                zone: ZoneType::Residential | ZoneType::Commercial
            })
        ));
    }
}
