use std::cell::Cell;

use models::Mode;

use crate::{
    api::DeviceApi,
    relays::{refresh_relays, RelayBoard},
    store::{Generation, Store},
};

pub const TITLE: &str = "Fridge Control Dashboard";

/// State lifted into the root view and shared with its children.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RootState {
    /// Last mode the device confirmed, or the default until the first fetch lands.
    pub mode: Mode,
    /// Set while a switch into manual mode is in flight; relay buttons are disabled.
    pub is_loading: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Panel {
    Relays,
    Thresholds,
}

impl RootState {
    pub fn panel(&self) -> Panel {
        match self.mode {
            Mode::Manual => Panel::Relays,
            Mode::Auto => Panel::Thresholds,
        }
    }
}

/// The mode the relay board was last fetched for.
#[derive(Default, Debug)]
pub struct ModeWatch(Cell<Option<Mode>>);

impl ModeWatch {
    /// Records `mode`, returning whether it differs from the last one seen.
    pub fn changed(&self, mode: Mode) -> bool {
        self.0.replace(Some(mode)) != Some(mode)
    }
}

/// Refetches the relay board on mount and after every mode change.
///
/// Busy-flag changes alone never trigger a fetch.
pub async fn follow_mode(
    api: &impl DeviceApi,
    root: &impl Store<RootState>,
    watch: &ModeWatch,
    board: &impl Store<RelayBoard>,
    generation: &Generation,
) {
    let mode = root.get().mode;
    if watch.changed(mode) {
        refresh_relays(api, board, generation).await;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use models::{ModeFlag, RelayId, RelayLevel, RelaySnapshot};

    use super::*;
    use crate::{
        mock::{push, MockApi},
        mode::sync_mode,
    };

    #[test]
    fn starts_in_auto_showing_thresholds() {
        let root = RootState::default();
        assert_eq!(root.mode, Mode::Auto);
        assert!(!root.is_loading);
        assert_eq!(root.panel(), Panel::Thresholds);
    }

    #[tokio::test]
    async fn manual_mode_from_device_shows_device_relays() {
        let api = MockApi::default();
        push(&api.mode_replies, Ok(ModeFlag { mode: Mode::Manual }));
        push(
            &api.relay_replies,
            Ok(RelaySnapshot {
                relay1: RelayLevel::On,
                relay2: RelayLevel::Off,
                relay3: RelayLevel::On,
                timestamp: 0,
                mode: Mode::Manual,
            }),
        );

        let root = RefCell::new(RootState::default());
        let board = RefCell::new(RelayBoard::default());
        let generation = Generation::default();
        let watch = ModeWatch::default();

        sync_mode(&api, &root).await;
        assert_eq!(root.get().panel(), Panel::Relays);

        follow_mode(&api, &root, &watch, &board, &generation).await;
        assert_eq!(api.called("GET /api/relay-state"), 1);

        let buttons = board.get().buttons();
        let on: Vec<_> = buttons.iter().map(|b| (b.id, b.on)).collect();
        assert_eq!(
            on,
            vec![
                (RelayId::Relay1, true),
                (RelayId::Relay2, false),
                (RelayId::Relay3, true)
            ]
        );
    }

    #[tokio::test]
    async fn relays_refetch_on_mount_and_each_mode_change() {
        let api = MockApi::default();
        let root = RefCell::new(RootState::default());
        let board = RefCell::new(RelayBoard::default());
        let generation = Generation::default();
        let watch = ModeWatch::default();
        let gets = || api.called("GET /api/relay-state");

        follow_mode(&api, &root, &watch, &board, &generation).await;
        assert_eq!(gets(), 1);

        follow_mode(&api, &root, &watch, &board, &generation).await;
        root.update(|state| state.is_loading = true);
        follow_mode(&api, &root, &watch, &board, &generation).await;
        assert_eq!(gets(), 1);

        push(&api.mode_replies, Ok(ModeFlag { mode: Mode::Manual }));
        sync_mode(&api, &root).await;
        follow_mode(&api, &root, &watch, &board, &generation).await;
        assert_eq!(gets(), 2);

        root.update(|state| state.mode = Mode::Auto);
        follow_mode(&api, &root, &watch, &board, &generation).await;
        assert_eq!(gets(), 3);
    }
}
