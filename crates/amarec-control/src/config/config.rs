//! Configuration management for amarec-control.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult, Environment,
    config::{
        BehaviourConfig, CONFIG_PATH_VAR, HotkeyConfig, LoggingConfig, RecorderConfig,
        TimingConfig, TranscodeConfig,
    },
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use amarec_control_core::{DispatcherConfig, RecorderLayout, TranscodeSettings};
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recorder hotkey.
    #[serde(default)]
    pub hotkey: HotkeyConfig,
    /// Waits around the stop hotkey.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Recorder window and output naming.
    #[serde(default)]
    pub recorder: RecorderConfig,
    /// Post-recording transcode.
    #[serde(default)]
    pub transcode: TranscodeConfig,
    /// Application behavior settings.
    #[serde(default)]
    pub behavior: BehaviourConfig,
    /// Diagnostic logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    ///
    /// The location is `AMAREC_CONTROL_CONFIG` when set, otherwise
    /// `config.toml` in the platform config directory.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::config_path()?,
        };

        Self::load_from(&config_path)
    }

    /// Load configuration from `config_path`, writing defaults if it is missing.
    ///
    /// Failing to write the default file is logged, not fatal: the recorder
    /// must still be controllable from a read-only install.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!(config_path = ?config_path, "No config found, creating default");

            let config = Config::default();
            if let Err(e) = config.save_to(config_path) {
                warn!(error = ?e, "Could not write default config, continuing with defaults");
            }

            Ok(config)
        }
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(config_dir) = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty() && !dir.exists())
        {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Build the dispatcher configuration for one invocation.
    ///
    /// The recorder output directory falls back to the destination directory,
    /// then to the working directory.
    pub fn dispatcher_config(&self, environment: &Environment) -> DispatcherConfig {
        let source_dir = self
            .recorder
            .output_dir
            .clone()
            .or_else(|| environment.destination.dest_dir.clone())
            .unwrap_or_default();

        DispatcherConfig {
            hotkey: self.hotkey.keys.clone(),
            key_settle_delay: Duration::from_millis(self.hotkey.settle_ms),
            pre_stop_delay: Duration::from_secs(self.timing.pre_stop_secs),
            post_stop_delay: Duration::from_secs(self.timing.post_stop_secs),
            layout: self.recorder_layout(),
            source_dir,
            destination: environment.destination.clone(),
            transcode: TranscodeSettings::from(&self.transcode),
        }
    }

    /// Recorder window and output naming.
    pub fn recorder_layout(&self) -> RecorderLayout {
        RecorderLayout {
            title_prefix: self.recorder.title_prefix.clone(),
            extension: self.recorder.extension.clone(),
        }
    }

    /// Directory for `debug.log`.
    #[track_caller]
    pub fn log_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.logging.log_dir {
            return Ok(dir.clone());
        }

        let proj_dirs = Self::project_dirs()?;
        Ok(proj_dirs.data_local_dir().join("logs"))
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = Self::project_dirs()?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    #[track_caller]
    fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "amarec-control", "AmaRec-Control").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
