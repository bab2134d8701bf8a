use std::{future::Future, time::Duration};

use models::SensorSnapshot;

use crate::{api::DeviceApi, store::Store};

/// Fixed sensor refresh period.
pub const SENSOR_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// What the sensor panel shows. A failed poll replaces any earlier reading.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum SensorReading {
    #[default]
    Loading,
    Failed(String),
    Ready(SensorSnapshot),
}

pub async fn refresh_sensors(api: &impl DeviceApi, reading: &impl Store<SensorReading>) {
    match api.sensors().await {
        Ok(snapshot) => reading.set(SensorReading::Ready(snapshot)),
        Err(err) => {
            tracing::warn!("Sensor poll failed: {err}");
            reading.set(SensorReading::Failed(err.to_string()));
        }
    }
}

/// Polls forever: one fetch straight away, then one per [`SENSOR_POLL_INTERVAL`].
///
/// Each fetch finishes before the next wait starts, so polls never overlap. Dropping
/// the future is the only way to stop it.
pub async fn poll_sensors<S, F>(api: &impl DeviceApi, reading: &impl Store<SensorReading>, mut sleep: S)
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    loop {
        refresh_sensors(api, reading).await;
        sleep(SENSOR_POLL_INTERVAL).await;
    }
}

pub fn humidity_text(humidity: f64) -> String {
    format!("{humidity:.1}%")
}

pub fn temperature_text(celcius: f64) -> String {
    format!("{celcius:.1}°C")
}

/// Title and formatted value of each sensor card, in display order.
pub fn sensor_cards(snapshot: &SensorSnapshot) -> [(&'static str, String); 3] {
    [
        ("Humidity", humidity_text(snapshot.humidity)),
        ("Temperature (Area)", temperature_text(snapshot.temp_dht22)),
        ("Temperature (Fridge)", temperature_text(snapshot.temp_ds18b20)),
    ]
}
