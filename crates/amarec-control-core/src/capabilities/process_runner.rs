use crate::{ControlError, CoreResult, ProcessRunner};

use std::{
    ffi::OsString,
    panic::Location,
    path::Path,
    process::{Command, Stdio},
};

use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs programs through `std::process::Command` with stdio detached.
///
/// On Windows the child gets no console window.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandRunner;

impl ProcessRunner for CommandRunner {
    #[track_caller]
    #[instrument(skip(self))]
    fn run(&mut self, program: &Path, args: &[OsString]) -> CoreResult<ProcessExit> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }

        let status = command.status().map_err(|e| ControlError::TranscodeFailed {
            reason: format!("Failed to launch {:?}: {}", program, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(code = ?status.code(), "Child process exited");

        Ok(ProcessExit {
            code: status.code(),
        })
    }
}
