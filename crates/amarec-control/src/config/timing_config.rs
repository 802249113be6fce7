use crate::config::{default_post_stop_secs, default_pre_stop_secs};

use serde::{Deserialize, Serialize};

/// Waits around the stop hotkey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Seconds between the stop request and the stop hotkey.
    #[serde(default = "default_pre_stop_secs")]
    pub pre_stop_secs: u64,

    /// Seconds between the stop hotkey and moving the file.
    #[serde(default = "default_post_stop_secs")]
    pub post_stop_secs: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            pre_stop_secs: default_pre_stop_secs(),
            post_stop_secs: default_post_stop_secs(),
        }
    }
}
