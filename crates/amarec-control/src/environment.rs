//! Environment variables set by the caller for each invocation.

use std::{ffi::OsString, path::PathBuf};

use amarec_control_core::DestinationVars;

/// Directory finished recordings are moved into.
pub const DEST_DIR_VAR: &str = "IKALOG_MP4_DESTDIR";

/// Base name for the finished recording.
pub const DEST_NAME_VAR: &str = "IKALOG_MP4_DESTNAME";

/// Match details the caller exports. Logged only, never used for control.
pub const INFO_VARS: [&str; 10] = [
    "IKALOG_STAGE",
    "IKALOG_RULE",
    "IKALOG_WEAPON",
    "IKALOG_KILL",
    "IKALOG_DEATH",
    "IKALOG_POINT",
    "IKALOG_WON",
    "IKALOG_RANK",
    "IKALOG_UDEMAE",
    "IKALOG_RANK_IN_TEAM",
];

/// Snapshot of the invocation's environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Destination directory and name. Empty values count as unset.
    pub destination: DestinationVars,
    /// Informational variables in [`INFO_VARS`] order.
    pub info: Vec<(&'static str, Option<String>)>,
}

impl Environment {
    /// Read from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Read through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            destination: DestinationVars {
                dest_dir: non_empty(DEST_DIR_VAR).map(PathBuf::from),
                dest_name: non_empty(DEST_NAME_VAR)
                    .map(|value| value.to_string_lossy().into_owned()),
            },
            info: INFO_VARS
                .iter()
                .map(|name| {
                    (
                        *name,
                        lookup(name).map(|value| value.to_string_lossy().into_owned()),
                    )
                })
                .collect(),
        }
    }
}
