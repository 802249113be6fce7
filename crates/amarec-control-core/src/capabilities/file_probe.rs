use crate::ExclusiveFileProbe;

use std::{fs::OpenOptions, path::Path};

use tracing::{debug, instrument};

/// Probes a file by opening it for writing and closing it again.
///
/// The open never creates or truncates. On Windows the recorder holds its
/// output without write sharing, so the open fails while recording.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenForWriteProbe;

impl ExclusiveFileProbe for OpenForWriteProbe {
    #[instrument(skip(self))]
    fn is_locked(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }

        match open_for_write(path) {
            Ok(file) => {
                drop(file);
                false
            }
            Err(e) => {
                debug!(error = %e, "Open for write refused, file is locked");
                true
            }
        }
    }
}

#[cfg(windows)]
fn open_for_write(path: &Path) -> std::io::Result<std::fs::File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_SHARE_READ: u32 = 0x0000_0001;
    const FILE_SHARE_WRITE: u32 = 0x0000_0002;

    OpenOptions::new()
        .write(true)
        .share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE)
        .open(path)
}

#[cfg(not(windows))]
fn open_for_write(path: &Path) -> std::io::Result<std::fs::File> {
    OpenOptions::new().write(true).open(path)
}
