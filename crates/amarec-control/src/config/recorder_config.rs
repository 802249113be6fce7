use amarec_control_core::recorder::{DEFAULT_RECORDER_EXTENSION, DEFAULT_TITLE_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Recorder window and output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Prefix of the recorder's window title.
    #[serde(default = "default_title_prefix")]
    pub title_prefix: String,

    /// Extension of the files the recorder writes, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory the recorder writes into (None = destination directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            title_prefix: default_title_prefix(),
            extension: default_extension(),
            output_dir: None,
        }
    }
}

fn default_title_prefix() -> String {
    DEFAULT_TITLE_PREFIX.to_string()
}

fn default_extension() -> String {
    DEFAULT_RECORDER_EXTENSION.to_string()
}
