pub use self::mode::ModeSwitcher;
pub use self::relays::RelayPanel;
pub use self::sensors::SensorDisplay;
pub use self::thresholds::ThresholdEditor;

pub mod mode;
pub mod relays;
pub mod sensors;
pub mod thresholds;
