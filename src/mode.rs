use models::Mode;

use crate::{
    api::DeviceApi,
    dashboard::RootState,
    error::LogErrorExt,
    store::{OnDrop, Store},
};

/// Adopts the device's mode, replacing the built-in default.
pub async fn sync_mode(api: &impl DeviceApi, root: &impl Store<RootState>) {
    if let Some(flag) = api.mode().await.log_err("Error fetching mode") {
        root.update(|state| state.mode = flag.mode);
    }
}

/// Asks the device for the opposite of the current mode.
pub async fn toggle_mode(
    api: &impl DeviceApi,
    root: &impl Store<RootState>,
    switching: &impl Store<bool>,
) {
    let target = root.get().mode.toggled();
    switch_mode(api, root, switching, target).await;
}

/// Sends `target` and commits it only once the device accepts it.
///
/// Overlapping calls are not ordered against each other: whichever accepted request
/// settles last decides the mode. Both busy flags are cleared when any call settles.
pub async fn switch_mode(
    api: &impl DeviceApi,
    root: &impl Store<RootState>,
    switching: &impl Store<bool>,
    target: Mode,
) {
    switching.set(true);
    if target == Mode::Manual {
        root.update(|state| state.is_loading = true);
    }
    let _settle = OnDrop::new(|| {
        switching.set(false);
        root.update(|state| state.is_loading = false);
    });

    if api
        .set_mode(target)
        .await
        .log_err("Failed to set mode")
        .is_some()
    {
        tracing::info!("Control mode set to {target}");
        root.update(|state| state.mode = target);
    }
}

pub fn mode_button_label(mode: Mode, switching: bool) -> String {
    if switching {
        "Switching...".into()
    } else {
        format!("Mode: {}", mode.as_str().to_uppercase())
    }
}
