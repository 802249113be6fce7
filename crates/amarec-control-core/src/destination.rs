//! Destination paths for finished recordings.

use std::path::{Path, PathBuf};

/// Default delivery format produced by the transcoder, without the dot.
pub const DEFAULT_DELIVERY_EXTENSION: &str = "mp4";

/// Destination directory and base name supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationVars {
    /// Directory finished recordings are moved into.
    pub dest_dir: Option<PathBuf>,
    /// Requested file name. Only its final path component is used.
    pub dest_name: Option<String>,
}

/// Resolve where the finished recording goes.
///
/// `None` when either variable is missing or empty. The extension is forced
/// to `container_ext`.
pub fn destination_path(vars: &DestinationVars, container_ext: &str) -> Option<PathBuf> {
    let dir = vars
        .dest_dir
        .as_deref()
        .filter(|dir| !dir.as_os_str().is_empty())?;
    let name = vars.dest_name.as_deref().filter(|name| !name.is_empty())?;
    let file_name = Path::new(name).file_name()?;

    let mut path = dir.join(file_name);
    path.set_extension(container_ext);
    Some(path)
}

/// Same path with the extension swapped to the delivery format.
pub fn transcoded_path(destination: &Path, delivery_ext: &str) -> PathBuf {
    destination.with_extension(delivery_ext)
}
