use models::{AutoConfig, Mode, ModeFlag, RelaySnapshot, SensorSnapshot};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::{config::DashboardConfig, error::ApiError};

pub mod paths {
    pub const RELAY_STATE: &str = "/api/relay-state";
    pub const MODE: &str = "/api/mode";
    pub const CONFIG: &str = "/api/config";
    pub const SENSORS: &str = "/api/sensors";
}

/// The controller's REST surface. Every call moves a whole snapshot.
#[allow(async_fn_in_trait)]
pub trait DeviceApi {
    async fn relay_state(&self) -> Result<RelaySnapshot, ApiError>;
    async fn set_relay_state(&self, snapshot: &RelaySnapshot) -> Result<(), ApiError>;
    async fn mode(&self) -> Result<ModeFlag, ApiError>;
    async fn set_mode(&self, mode: Mode) -> Result<(), ApiError>;
    async fn config(&self) -> Result<AutoConfig, ApiError>;
    async fn set_config(&self, config: &AutoConfig) -> Result<(), ApiError>;
    async fn sensors(&self) -> Result<SensorSnapshot, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(config: &DashboardConfig) -> Self {
        HttpApi {
            client: Client::new(),
            base: config.device_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                action: "fetch",
                path,
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { path, source })
    }

    /// Response bodies of updates are never looked at; only the status counts.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &'static str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { path, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                action: "update",
                path,
                status,
            });
        }

        Ok(())
    }
}

impl DeviceApi for HttpApi {
    async fn relay_state(&self) -> Result<RelaySnapshot, ApiError> {
        self.get_json(paths::RELAY_STATE).await
    }

    async fn set_relay_state(&self, snapshot: &RelaySnapshot) -> Result<(), ApiError> {
        self.post_json(paths::RELAY_STATE, snapshot).await
    }

    async fn mode(&self) -> Result<ModeFlag, ApiError> {
        self.get_json(paths::MODE).await
    }

    async fn set_mode(&self, mode: Mode) -> Result<(), ApiError> {
        self.post_json(paths::MODE, &ModeFlag { mode }).await
    }

    async fn config(&self) -> Result<AutoConfig, ApiError> {
        self.get_json(paths::CONFIG).await
    }

    async fn set_config(&self, config: &AutoConfig) -> Result<(), ApiError> {
        self.post_json(paths::CONFIG, config).await
    }

    async fn sensors(&self) -> Result<SensorSnapshot, ApiError> {
        self.get_json(paths::SENSORS).await
    }
}
