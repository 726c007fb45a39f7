//! # City Generator
//!
//! Runs the four stages against one random stream and one noise field:
//!
//! ```text
//! config -> roads -> zones -> buildings -> sensors
//! ```
//!
//! Only buildings read an earlier stage (the zones). The order still
//! matters for every stage: all four draw from the same stream, so moving
//! one stage changes every value generated after it.
//!
//! ## Lifecycle
//!
//! `Constructed` -> `generate()` -> `Generated`. A generator produces one
//! city. Calling `generate()` again is rejected; build a new generator for
//! another city.

use civitas_shared::{Building, CityConfig, Road, Sensor, Zone};

use crate::buildings::BuildingGenerator;
use crate::error::{GenResult, GenerationError};
use crate::noise::SimplexNoise;
use crate::random::{CitySeed, SeededRandom};
use crate::roads::RoadNetworkGenerator;
use crate::sensors::SensorGenerator;
use crate::zones::ZoneGenerator;

/// A generated city.
///
/// Read-only: the collections are exposed as slices and the fields cannot
/// be modified after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    config: CityConfig,
    zones: Vec<Zone>,
    roads: Vec<Road>,
    buildings: Vec<Building>,
    sensors: Vec<Sensor>,
}

impl City {
    /// The config the city was generated from.
    #[must_use]
    pub const fn config(&self) -> &CityConfig {
        &self.config
    }

    /// Zone cells, x-major.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Road segments: arterials first, then secondaries.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Grid buildings followed by the two landmarks.
    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Sensors.
    #[must_use]
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }
}

/// Lifecycle of a [`CityGenerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneratorState {
    /// Config captured, stream seeded, nothing generated.
    Constructed,
    /// The city exists. Terminal.
    Generated,
}

/// Orchestrates city generation.
///
/// # Example
///
/// ```rust,ignore
/// let mut generator = CityGenerator::new(CityConfig::default())?;
/// let city = generator.generate()?;
///
/// assert_eq!(city.sensors().len(), 50);
/// assert_eq!(city.buildings().last().unwrap().id, "water-treatment");
/// ```
pub struct CityGenerator {
    config: CityConfig,
    rng: SeededRandom,
    noise: SimplexNoise,
    city: Option<City>,
}

impl CityGenerator {
    /// Validates the config and seeds the stream and noise field.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Config`] for an invalid extent.
    pub fn new(config: CityConfig) -> GenResult<Self> {
        config.validate()?;
        let seed = CitySeed::new(config.seed);

        Ok(Self {
            config,
            rng: SeededRandom::new(seed),
            noise: SimplexNoise::new(seed),
            city: None,
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> GeneratorState {
        if self.city.is_some() {
            GeneratorState::Generated
        } else {
            GeneratorState::Constructed
        }
    }

    /// The captured config.
    #[must_use]
    pub const fn config(&self) -> &CityConfig {
        &self.config
    }

    /// Runs every stage once, in order, and returns the city.
    ///
    /// Stages write into a scratch city on a copy of the stream. Both are
    /// committed only when every stage succeeds, so a failure leaves the
    /// generator in `Constructed` with nothing exposed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::AlreadyGenerated`] on a second call, or
    /// the first stage failure.
    pub fn generate(&mut self) -> GenResult<&City> {
        if self.city.is_some() {
            tracing::warn!("Rejected second generate() for seed {}", self.config.seed);
            return Err(GenerationError::AlreadyGenerated);
        }

        let mut rng = self.rng.clone();
        let city = self.run_stages(&mut rng)?;

        tracing::info!(
            "City generated: seed={} zones={} roads={} buildings={} sensors={}",
            self.config.seed,
            city.zones.len(),
            city.roads.len(),
            city.buildings.len(),
            city.sensors.len()
        );

        self.rng = rng;
        Ok(self.city.insert(city))
    }

    fn run_stages(&self, rng: &mut SeededRandom) -> GenResult<City> {
        let config = &self.config;

        let roads = RoadNetworkGenerator::new(config).generate(rng)?;
        tracing::debug!("Road stage: {} segments", roads.len());

        let zones = ZoneGenerator::new(config).generate(rng, &self.noise);
        tracing::debug!("Zone stage: {} cells", zones.len());

        let buildings = BuildingGenerator::new(config).generate(&zones, rng, &self.noise);
        tracing::debug!("Building stage: {} buildings", buildings.len());

        let sensors = SensorGenerator::new(config).generate(rng)?;
        tracing::debug!("Sensor stage: {} sensors", sensors.len());

        Ok(City {
            config: *config,
            zones,
            roads,
            buildings,
            sensors,
        })
    }

    /// The generated city.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NotGenerated`] before `generate()`.
    pub fn city(&self) -> GenResult<&City> {
        self.city.as_ref().ok_or(GenerationError::NotGenerated)
    }

    /// Consumes the generator and returns the generated city.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NotGenerated`] before `generate()`.
    pub fn into_city(self) -> GenResult<City> {
        self.city.ok_or(GenerationError::NotGenerated)
    }

    /// Zones; empty before generation.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        self.city.as_ref().map(City::zones).unwrap_or_default()
    }

    /// Roads; empty before generation.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        self.city.as_ref().map(City::roads).unwrap_or_default()
    }

    /// Buildings; empty before generation.
    #[must_use]
    pub fn buildings(&self) -> &[Building] {
        self.city.as_ref().map(City::buildings).unwrap_or_default()
    }

    /// Sensors; empty before generation.
    #[must_use]
    pub fn sensors(&self) -> &[Sensor] {
        self.city.as_ref().map(City::sensors).unwrap_or_default()
    }
}

/// Generates a city in one call.
///
/// # Errors
///
/// Returns the config or stage error, as [`CityGenerator`] would.
pub fn generate_city(config: CityConfig) -> GenResult<City> {
    let mut generator = CityGenerator::new(config)?;
    generator.generate()?;
    generator.into_city()
}

#[cfg(test)]
mod tests {
    use super::*;
    use civitas_shared::ConfigError;

    #[test]
    fn test_lifecycle() {
        let mut generator = CityGenerator::new(CityConfig::default()).expect("valid config");
        assert_eq!(generator.state(), GeneratorState::Constructed);
        assert!(generator.buildings().is_empty());
        assert_eq!(generator.city().unwrap_err(), GenerationError::NotGenerated);

        let building_count = generator.generate().expect("generate").buildings().len();
        assert_eq!(generator.state(), GeneratorState::Generated);
        assert_eq!(generator.buildings().len(), building_count);
        assert_eq!(generator.sensors().len(), 50);
    }

    #[test]
    fn test_second_generate_rejected_and_city_kept() {
        let mut generator = CityGenerator::new(CityConfig::default()).expect("valid config");
        let first = generator.generate().expect("generate").clone();

        assert_eq!(
            generator.generate().unwrap_err(),
            GenerationError::AlreadyGenerated
        );
        assert_eq!(generator.state(), GeneratorState::Generated);
        assert_eq!(generator.city().expect("city"), &first);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CityConfig {
            seed: 1,
            width: -10.0,
            height: 100.0,
            population: 0,
        };
        assert!(matches!(
            CityGenerator::new(config),
            Err(GenerationError::Config(ConfigError::NonPositiveExtent {
                axis: "width",
                ..
            }))
        ));
    }

    #[test]
    fn test_into_city_requires_generation() {
        let generator = CityGenerator::new(CityConfig::default()).expect("valid config");
        assert_eq!(
            generator.into_city().unwrap_err(),
            GenerationError::NotGenerated
        );
    }

    #[test]
    fn test_generate_city_matches_generator() {
        let config = CityConfig::new(99, 1200.0, 1600.0, 0).expect("valid config");
        let direct = generate_city(config).expect("city");

        let mut generator = CityGenerator::new(config).expect("valid config");
        generator.generate().expect("generate");

        assert_eq!(generator.city().expect("city"), &direct);
        assert_eq!(direct.config(), &config);
    }
}
