use anyhow::{ensure, Context};
use reqwest::Url;

/// Where the controller listens unless overridden when the bundle is built.
pub const DEVICE_URL: &str = match option_env!("FRIDGE_DEVICE_URL") {
    Some(url) => url,
    None => "http://192.168.100.171:5050",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Scheme, host and port with no trailing slash.
    pub device_url: String,
}

impl DashboardConfig {
    pub fn with_device_url(url: &str) -> anyhow::Result<Self> {
        let parsed = Url::parse(url).with_context(|| format!("invalid device url {url:?}"))?;
        ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "device url must be http(s), got {url:?}"
        );

        Ok(DashboardConfig {
            device_url: parsed.as_str().trim_end_matches('/').to_owned(),
        })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            device_url: DEVICE_URL.trim_end_matches('/').to_owned(),
        }
    }
}
