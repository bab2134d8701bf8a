//! Synchronisation core of the fridge dashboard.
//!
//! Each module holds one dashboard component's state and the requests that move it.
//! Nothing here renders; the `frontend` crate binds these to sycamore signals.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod mode;
pub mod relays;
pub mod sensors;
pub mod store;
pub mod thresholds;

#[cfg(test)]
mod mock;

pub use api::{DeviceApi, HttpApi};
pub use config::DashboardConfig;
pub use dashboard::RootState;
pub use error::{ApiError, LogErrorExt};
pub use store::{Generation, Store};

pub use models;
