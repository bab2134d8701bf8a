use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// A relay output, `0` or `1` on the wire.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RelayLevel {
    Off,
    On,
}

impl RelayLevel {
    pub fn flipped(self) -> RelayLevel {
        match self {
            RelayLevel::Off => RelayLevel::On,
            RelayLevel::On => RelayLevel::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == RelayLevel::On
    }
}

impl TryFrom<u8> for RelayLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RelayLevel::Off),
            1 => Ok(RelayLevel::On),
            other => Err(format!("relay level must be 0 or 1, got {other}")),
        }
    }
}

impl From<RelayLevel> for u8 {
    fn from(level: RelayLevel) -> u8 {
        match level {
            RelayLevel::Off => 0,
            RelayLevel::On => 1,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RelayId {
    Relay1,
    Relay2,
    Relay3,
}

impl RelayId {
    pub const ALL: [RelayId; 3] = [RelayId::Relay1, RelayId::Relay2, RelayId::Relay3];

    pub fn key(self) -> &'static str {
        match self {
            RelayId::Relay1 => "relay1",
            RelayId::Relay2 => "relay2",
            RelayId::Relay3 => "relay3",
        }
    }

    pub fn from_key(key: &str) -> Option<RelayId> {
        RelayId::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for RelayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Full body of `/api/relay-state`. Always sent and received whole.
///
/// Field order is part of the contract: the dashboard labels relay buttons by the
/// position of their key in [`RelaySnapshot::KEYS`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RelaySnapshot {
    pub relay1: RelayLevel,
    pub relay2: RelayLevel,
    pub relay3: RelayLevel,
    /// Milliseconds since the epoch of the last client-side change.
    pub timestamp: i64,
    pub mode: Mode,
}

impl RelaySnapshot {
    pub const KEYS: [&'static str; 5] = ["relay1", "relay2", "relay3", "timestamp", "mode"];

    pub fn level(&self, id: RelayId) -> RelayLevel {
        match id {
            RelayId::Relay1 => self.relay1,
            RelayId::Relay2 => self.relay2,
            RelayId::Relay3 => self.relay3,
        }
    }

    pub fn set_level(&mut self, id: RelayId, level: RelayLevel) {
        match id {
            RelayId::Relay1 => self.relay1 = level,
            RelayId::Relay2 => self.relay2 = level,
            RelayId::Relay3 => self.relay3 = level,
        }
    }

    /// Relays paired with the index of their key among all snapshot keys.
    pub fn keyed_relays() -> impl Iterator<Item = (usize, RelayId)> {
        Self::KEYS
            .into_iter()
            .enumerate()
            .filter_map(|(idx, key)| RelayId::from_key(key).map(|id| (idx, id)))
    }

    /// The snapshot to send after the user flips `id` at `now_ms`.
    ///
    /// The timestamp never moves backwards, even if the local clock does.
    pub fn toggled(&self, id: RelayId, now_ms: i64) -> RelaySnapshot {
        let mut next = *self;
        next.set_level(id, self.level(id).flipped());
        next.timestamp = now_ms.max(self.timestamp.saturating_add(1));
        next.mode = Mode::Manual;
        next
    }
}

impl Default for RelaySnapshot {
    fn default() -> Self {
        RelaySnapshot {
            relay1: RelayLevel::On,
            relay2: RelayLevel::On,
            relay3: RelayLevel::On,
            timestamp: 0,
            mode: Mode::Manual,
        }
    }
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> RelaySnapshot {
        RelaySnapshot {
            relay1: RelayLevel::On,
            relay2: RelayLevel::Off,
            relay3: RelayLevel::On,
            timestamp: 1_000,
            mode: Mode::Auto,
        }
    }

    #[test]
    fn decodes_device_payload() {
        let json = r#"{"relay1":1,"relay2":0,"relay3":1,"timestamp":0,"mode":"manual"}"#;
        let snap: RelaySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.relay1, RelayLevel::On);
        assert_eq!(snap.relay2, RelayLevel::Off);
        assert_eq!(snap.mode, Mode::Manual);
        assert_eq!(serde_json::to_string(&snap).unwrap(), json);
    }

    #[test]
    fn rejects_levels_other_than_zero_or_one() {
        let json = r#"{"relay1":2,"relay2":0,"relay3":1,"timestamp":0,"mode":"manual"}"#;
        assert!(serde_json::from_str::<RelaySnapshot>(json).is_err());
    }

    #[test]
    fn toggle_touches_only_the_clicked_relay() {
        let before = snapshot();
        for id in RelayId::ALL {
            let after = before.toggled(id, 5_000);
            assert_eq!(after.level(id), before.level(id).flipped());
            for other in RelayId::ALL.into_iter().filter(|o| *o != id) {
                assert_eq!(after.level(other), before.level(other));
            }
            assert_eq!(after.mode, Mode::Manual);
            assert_eq!(after.timestamp, 5_000);
        }
    }

    #[test]
    fn toggle_timestamp_is_monotonic() {
        let before = snapshot();
        let after = before.toggled(RelayId::Relay2, 10);
        assert!(after.timestamp > before.timestamp);
    }

    #[test]
    fn double_toggle_restores_level() {
        let before = snapshot();
        let after = before
            .toggled(RelayId::Relay3, 2_000)
            .toggled(RelayId::Relay3, 2_001);
        assert_eq!(after.relay3, before.relay3);
    }

    #[test]
    fn labels_follow_key_positions() {
        let keyed: Vec<_> = RelaySnapshot::keyed_relays().collect();
        assert_eq!(
            keyed,
            vec![
                (0, RelayId::Relay1),
                (1, RelayId::Relay2),
                (2, RelayId::Relay3)
            ]
        );
    }
}
