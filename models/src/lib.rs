pub mod config;
pub mod mode;
pub mod relay;
pub mod sensors;

pub use config::AutoConfig;
pub use mode::{Mode, ModeFlag};
pub use relay::{RelayId, RelayLevel, RelaySnapshot};
pub use sensors::SensorSnapshot;
