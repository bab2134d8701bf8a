use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong talking to the device.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to {action} {}: {}", .path.trim_start_matches("/api/"), .status.as_u16())]
    Status {
        action: &'static str,
        path: &'static str,
        status: StatusCode,
    },
    #[error("Malformed response from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Terminal handling for component requests: log the failure and carry on.
pub trait LogErrorExt {
    type Out;
    fn log_err(self, context: &str) -> Self::Out;
}

impl<T, E: fmt::Display> LogErrorExt for Result<T, E> {
    type Out = Option<T>;
    fn log_err(self, context: &str) -> Self::Out {
        self.map_err(|e| tracing::error!("{context}: {e}")).ok()
    }
}
