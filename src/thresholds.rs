use models::AutoConfig;

use crate::{
    api::DeviceApi,
    error::LogErrorExt,
    store::{OnDrop, Store},
};

/// Replaces the form defaults with the device's setpoints.
pub async fn load_thresholds(api: &impl DeviceApi, form: &impl Store<AutoConfig>) {
    if let Some(config) = api.config().await.log_err("Failed to fetch config") {
        form.set(config);
    }
}

/// Sends the form as it stands. Values are not checked here; the device validates them.
pub async fn save_thresholds(
    api: &impl DeviceApi,
    form: &impl Store<AutoConfig>,
    saving: &impl Store<bool>,
) {
    saving.set(true);
    let _done = OnDrop::new(|| saving.set(false));

    let config = form.get();
    tracing::debug!("Saving control config {config:?}");
    api.set_config(&config)
        .await
        .log_err("Failed to update config");
}

/// Reads one number input. Blank or unparsable text becomes NaN and is kept that way.
pub fn parse_threshold(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

/// Text for a number input; NaN shows as an empty box.
pub fn threshold_text(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

pub fn save_label(saving: bool) -> &'static str {
    if saving {
        "Saving..."
    } else {
        "Save Settings"
    }
}
