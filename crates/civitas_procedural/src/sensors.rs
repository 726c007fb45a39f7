//! # Sensor Scatter
//!
//! Fifty sensors placed uniformly over the extent. Placement ignores
//! buildings and roads; a sensor may sit on either.

use civitas_shared::{CityConfig, Sensor, SensorType};

use crate::error::GenResult;
use crate::random::SeededRandom;

/// Scatters sensors over the city extent.
pub struct SensorGenerator {
    width: f64,
    height: f64,
}

impl SensorGenerator {
    /// Sensors per city.
    pub const SENSOR_COUNT: usize = 50;
    /// Mounting height above ground.
    pub const MOUNT_HEIGHT: f64 = 5.0;
    /// Upper bound of a sensor reading.
    pub const MAX_VALUE: f64 = 100.0;

    /// Creates a generator for the config's extent.
    #[must_use]
    pub fn new(config: &CityConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }

    /// Generates exactly [`Self::SENSOR_COUNT`] sensors.
    ///
    /// Draw order per sensor: x, y, type, value.
    ///
    /// # Errors
    ///
    /// Propagates random-stream precondition failures.
    pub fn generate(&self, rng: &mut SeededRandom) -> GenResult<Vec<Sensor>> {
        let mut sensors = Vec::with_capacity(Self::SENSOR_COUNT);

        for index in 0..Self::SENSOR_COUNT {
            let x = rng.random_float(0.0, self.width);
            let y = rng.random_float(0.0, self.height);
            let sensor_type = *rng.choice(&SensorType::ALL, "sensor type")?;

            sensors.push(Sensor {
                id: format!("sensor-{index}"),
                sensor_type,
                position: [x, Self::MOUNT_HEIGHT, y],
                value: rng.random_float(0.0, Self::MAX_VALUE),
            });
        }

        Ok(sensors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::CitySeed;
    use std::collections::HashSet;

    fn generate(seed: u64) -> Vec<Sensor> {
        let config = CityConfig::new(seed, 1600.0, 900.0, 0).expect("valid config");
        let mut rng = SeededRandom::new(CitySeed::new(seed));
        SensorGenerator::new(&config)
            .generate(&mut rng)
            .expect("sensors")
    }

    #[test]
    fn test_count_and_ids() {
        let sensors = generate(12);
        assert_eq!(sensors.len(), 50);

        let ids: HashSet<&str> = sensors.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(sensors[0].id, "sensor-0");
        assert_eq!(sensors[49].id, "sensor-49");
    }

    #[test]
    fn test_ranges() {
        for seed in 0..10 {
            for sensor in generate(seed) {
                let [x, y, z] = sensor.position;
                assert!((0.0..1600.0).contains(&x));
                assert_eq!(y, 5.0);
                assert!((0.0..900.0).contains(&z));
                assert!((0.0..=100.0).contains(&sensor.value));
            }
        }
    }

    #[test]
    fn test_all_types_appear() {
        let types: HashSet<SensorType> = (0..5)
            .flat_map(generate)
            .map(|s| s.sensor_type)
            .collect();
        assert_eq!(types.len(), SensorType::ALL.len());
    }
}
