mod behaviour_config;
#[allow(clippy::module_inception)]
mod config;
mod hotkey_config;
mod logging_config;
mod recorder_config;
mod timing_config;
mod transcode_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, config::Config, hotkey_config::HotkeyConfig,
    logging_config::LoggingConfig, recorder_config::RecorderConfig,
    timing_config::TimingConfig, transcode_config::TranscodeConfig,
};

/// Environment variable that overrides the config file location.
pub(crate) const CONFIG_PATH_VAR: &str = "AMAREC_CONTROL_CONFIG";

pub(crate) const DEFAULT_SETTLE_MS: u64 = 16;
pub(crate) const DEFAULT_PRE_STOP_SECS: u64 = 15;
pub(crate) const DEFAULT_POST_STOP_SECS: u64 = 10;

pub(crate) fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE_MS
}

pub(crate) fn default_pre_stop_secs() -> u64 {
    DEFAULT_PRE_STOP_SECS
}

pub(crate) fn default_post_stop_secs() -> u64 {
    DEFAULT_POST_STOP_SECS
}
