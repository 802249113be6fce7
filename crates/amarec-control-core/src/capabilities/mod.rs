//! OS-facing seams used by the dispatcher.
//!
//! Window enumeration and key injection are platform specific and live in
//! the binary crate. The file probe and process runner are portable and
//! ship here.

mod file_probe;
mod process_runner;

pub use {
    file_probe::OpenForWriteProbe,
    process_runner::{CommandRunner, ProcessExit},
};

use crate::{CoreResult, HotkeyKey};

use std::{ffi::OsString, path::Path};

/// Snapshot of every top-level window title.
pub trait WindowLister {
    /// Collect the titles of all top-level windows at the instant of the call.
    fn window_titles(&mut self) -> CoreResult<Vec<String>>;
}

/// Global keyboard input injection.
pub trait KeyInjector {
    /// Inject a key-down event.
    fn press(&mut self, key: HotkeyKey) -> CoreResult<()>;

    /// Inject a key-up event.
    fn release(&mut self, key: HotkeyKey) -> CoreResult<()>;
}

/// Tests whether another process holds a file open exclusively.
pub trait ExclusiveFileProbe {
    /// `true` when `path` is a regular file that cannot be opened for writing.
    fn is_locked(&self, path: &Path) -> bool;
}

/// Runs an external program to completion.
pub trait ProcessRunner {
    /// Launch `program` with `args` and block until it exits. No timeout.
    fn run(&mut self, program: &Path, args: &[OsString]) -> CoreResult<ProcessExit>;
}
