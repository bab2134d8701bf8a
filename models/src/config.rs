use serde::{Deserialize, Serialize};

/// Compressor hysteresis setpoints, degrees Celcius.
///
/// Ordering (`start > stop`) is left to the device to validate. Non-finite values are
/// sent as-is and end up as `null` on the wire.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AutoConfig {
    pub temp_start_compressor: f64,
    pub temp_stop_compressor: f64,
}

impl Default for AutoConfig {
    fn default() -> Self {
        AutoConfig {
            temp_start_compressor: 4.5,
            temp_stop_compressor: 3.5,
        }
    }
}
