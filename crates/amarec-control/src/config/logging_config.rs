use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Diagnostic logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a debug-level `debug.log` with an invocation snapshot.
    #[serde(default)]
    pub debug_log: bool,

    /// Directory for `debug.log` (None = platform data directory).
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}
