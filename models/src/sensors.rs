use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Area temperature from the DHT22, °C.
    pub temp_dht22: f64,
    /// Fridge temperature from the DS18B20, °C.
    pub temp_ds18b20: f64,
}
