//! Structured logging setup.
//!
//! Human-readable events go to stderr, filtered by `RUST_LOG` (default
//! `info` for this tool's crates). With `logging.debug_log` enabled, a
//! second non-blocking layer appends everything at debug level to
//! `debug.log`.

use crate::{AppError, AppResult, config::Config};

use std::{fs, panic::Location};

use error_location::ErrorLocation;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, prelude::*};

/// Default filter for the stderr layer.
pub const DEFAULT_FILTER: &str = "amarec_control=info,amarec_control_core=info";

/// Filter for the `debug.log` layer.
pub const DEBUG_LOG_FILTER: &str = "amarec_control=debug,amarec_control_core=debug";

/// File name of the diagnostic log.
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Initialize logging. Keep the returned guard alive until exit so the
/// file writer flushes.
#[track_caller]
pub fn init_logging(config: &Config) -> AppResult<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    let (file_layer, guard) = if config.logging.debug_log {
        let log_dir = config.log_dir()?;
        fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::never(&log_dir, DEBUG_LOG_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_filter(EnvFilter::new(DEBUG_LOG_FILTER));

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to install subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(guard)
}
