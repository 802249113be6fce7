use crate::config::default_settle_ms;

use amarec_control_core::HotkeyKey;
use serde::{Deserialize, Serialize};

/// Recorder hotkey configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Keys pressed together, e.g. `["ctrl", "z"]` or `["f7"]`.
    #[serde(default = "HotkeyKey::default_chord")]
    pub keys: Vec<HotkeyKey>,

    /// Milliseconds to hold the chord before releasing.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            keys: HotkeyKey::default_chord(),
            settle_ms: default_settle_ms(),
        }
    }
}
