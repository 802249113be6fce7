use serde::{Deserialize, Serialize};

/// Application behavior configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Exit with code 2 when moving or transcoding the recording fails.
    #[serde(default)]
    pub fail_on_finalize_error: bool,
}
