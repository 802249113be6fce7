//! Command-line interface.

use crate::app::EXIT_FAILURE;

use std::ffi::OsString;

use amarec_control_core::Operation;
use clap::{Parser, Subcommand};

/// Start or stop AmaRecTV recording by hotkey.
#[derive(Parser, Debug)]
#[command(name = "amarec-control")]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(about = "Start or stop AmaRecTV recording and collect the finished file")]
pub struct Cli {
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// The two accepted operations.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Send the record hotkey unless the recorder is already recording.
    Start,
    /// Wait, send the stop hotkey, then move the finished recording to
    /// `$IKALOG_MP4_DESTDIR/$IKALOG_MP4_DESTNAME.avi`.
    Stop,
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Operation::Start,
            Command::Stop => Operation::Stop,
        }
    }
}

/// Parse `args` into the requested operation.
///
/// Anything other than exactly `start` or `stop` prints clap's message and
/// yields the usage exit code, help and version requests included.
pub(crate) fn parse_args<I, T>(args: I) -> Result<Operation, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli.command.into()),
        Err(e) => {
            let _ = e.print();
            Err(EXIT_FAILURE)
        }
    }
}
