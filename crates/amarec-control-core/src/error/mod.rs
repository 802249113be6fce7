use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder control errors with source location tracking.
#[derive(Error, Debug)]
pub enum ControlError {
    /// `start` was requested while the recorder output file is locked.
    #[error("Recorder is already recording to {path:?} {location}")]
    AlreadyRecording {
        /// Output file the recorder currently holds open.
        path: PathBuf,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// `stop` was requested while no recording is in progress.
    #[error("Recorder is not recording {location}")]
    NotRecording {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Enumerating top-level windows failed.
    #[error("Window enumeration failed: {reason} {location}")]
    WindowEnumeration {
        /// Description of the OS failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Injecting a key event failed.
    #[error("Key injection failed: {reason} {location}")]
    KeyInjection {
        /// Description of the injection failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A hotkey key name could not be parsed.
    #[error("Invalid hotkey key {name:?} {location}")]
    InvalidKey {
        /// The rejected key name.
        name: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Moving the finished recording to its destination failed.
    #[error("Failed to move {from:?} to {to:?}: {source} {location}")]
    MoveFailed {
        /// Recorder output file.
        from: PathBuf,
        /// Requested destination.
        to: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The transcoder could not be launched or exited unsuccessfully.
    #[error("Transcode failed: {reason} {location}")]
    TranscodeFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ControlError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ControlError::Io {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

/// Result type alias using [`ControlError`].
pub type Result<T> = std::result::Result<T, ControlError>;
