use amarec_control_core::{TranscodeSettings, destination::DEFAULT_DELIVERY_EXTENSION};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Post-recording transcode configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeConfig {
    /// Transcode the moved recording and delete the intermediate file.
    #[serde(default)]
    pub enabled: bool,

    /// Transcoder executable.
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// Argument template, `{input}` and `{output}` are substituted.
    #[serde(default = "TranscodeSettings::default_args")]
    pub args: Vec<String>,

    /// Delivery extension, without the dot.
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

impl Default for TranscodeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: default_program(),
            args: TranscodeSettings::default_args(),
            output_extension: default_output_extension(),
        }
    }
}

impl From<&TranscodeConfig> for TranscodeSettings {
    fn from(config: &TranscodeConfig) -> Self {
        TranscodeSettings {
            enabled: config.enabled,
            program: config.program.clone(),
            args: config.args.clone(),
            output_extension: config.output_extension.clone(),
        }
    }
}

fn default_program() -> PathBuf {
    PathBuf::from("ffmpeg")
}

fn default_output_extension() -> String {
    DEFAULT_DELIVERY_EXTENSION.to_string()
}
