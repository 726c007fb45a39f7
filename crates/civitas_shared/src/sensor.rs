//! # Sensors

use serde::{Deserialize, Serialize};

use crate::Point3;

/// What a sensor measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    /// Air quality index.
    AirQuality,
    /// Water consumption.
    WaterMeter,
    /// Vehicle counts.
    TrafficCounter,
    /// Grid energy flow.
    EnergyNode,
}

impl SensorType {
    /// Every sensor type, in the order used for uniform selection.
    pub const ALL: [Self; 4] = [
        Self::AirQuality,
        Self::WaterMeter,
        Self::TrafficCounter,
        Self::EnergyNode,
    ];

    /// Returns the snake-case name used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AirQuality => "air_quality",
            Self::WaterMeter => "water_meter",
            Self::TrafficCounter => "traffic_counter",
            Self::EnergyNode => "energy_node",
        }
    }
}

/// A measurement point scattered over the city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Unique id (`sensor-<n>`).
    pub id: String,
    /// Measurement kind.
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    /// World position; sensors are mounted above ground.
    pub position: Point3,
    /// Current reading in `[0, 100]`.
    pub value: f64,
}
