use models::{relay::now_millis, RelayId, RelaySnapshot};

use crate::{
    api::DeviceApi,
    error::LogErrorExt,
    store::{Generation, Store},
};

/// Relay state as shown in manual mode.
///
/// A toggle is held in `pending` and displayed straight away. It is never rolled back
/// when the device rejects it: the next successful fetch replaces both halves, and
/// until then the screen may disagree with the device.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RelayBoard {
    pub confirmed: RelaySnapshot,
    pub pending: Option<RelaySnapshot>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RelayButton {
    pub id: RelayId,
    pub label: String,
    pub on: bool,
    /// Shown value differs from what the device last reported.
    pub pending: bool,
}

impl RelayBoard {
    pub fn shown(&self) -> RelaySnapshot {
        self.pending.unwrap_or(self.confirmed)
    }

    pub fn confirm(&mut self, snapshot: RelaySnapshot) {
        self.confirmed = snapshot;
        self.pending = None;
    }

    /// Applies a user toggle locally and returns the full snapshot to send.
    pub fn begin_toggle(&mut self, id: RelayId, now_ms: i64) -> RelaySnapshot {
        let next = self.shown().toggled(id, now_ms);
        self.pending = Some(next);
        next
    }

    pub fn buttons(&self) -> Vec<RelayButton> {
        RelaySnapshot::keyed_relays()
            .map(|(idx, id)| self.button_at(idx, id))
            .collect()
    }

    pub fn button(&self, id: RelayId) -> RelayButton {
        let (idx, _) = RelaySnapshot::keyed_relays()
            .find(|(_, keyed)| *keyed == id)
            .unwrap_or((0, id));
        self.button_at(idx, id)
    }

    fn button_at(&self, idx: usize, id: RelayId) -> RelayButton {
        let shown = self.shown().level(id);
        RelayButton {
            id,
            label: format!("Relay {idx}"),
            on: shown.is_on(),
            pending: shown != self.confirmed.level(id),
        }
    }
}

impl RelayButton {
    pub fn class(&self, disabled: bool) -> String {
        let mut class = String::from("relay-button");
        class.push_str(if self.on { " relay-on" } else { " relay-off" });
        if self.pending {
            class.push_str(" relay-pending");
        }
        if disabled {
            class.push_str(" relay-disabled");
        }
        class
    }
}

/// Replaces the board with the device's snapshot.
///
/// Responses that come back after a newer fetch or a local toggle has started are
/// dropped.
pub async fn refresh_relays(
    api: &impl DeviceApi,
    board: &impl Store<RelayBoard>,
    generation: &Generation,
) {
    let ticket = generation.advance();
    let Some(snapshot) = api.relay_state().await.log_err("Error getting relay data") else {
        return;
    };

    if !generation.is_current(ticket) {
        tracing::debug!("Discarding stale relay state {snapshot:?}");
        return;
    }
    board.update(|board| board.confirm(snapshot));
}

pub async fn toggle_relay(
    api: &impl DeviceApi,
    board: &impl Store<RelayBoard>,
    generation: &Generation,
    id: RelayId,
) {
    toggle_relay_at(api, board, generation, id, now_millis()).await
}

pub async fn toggle_relay_at(
    api: &impl DeviceApi,
    board: &impl Store<RelayBoard>,
    generation: &Generation,
    id: RelayId,
    now_ms: i64,
) {
    generation.advance();

    let mut next_board = board.get();
    let outgoing = next_board.begin_toggle(id, now_ms);
    board.set(next_board);

    // no rollback on failure, see RelayBoard
    if api
        .set_relay_state(&outgoing)
        .await
        .log_err("Error sending relay data")
        .is_some()
    {
        tracing::debug!("Sent relay state {outgoing:?}");
    }
}
