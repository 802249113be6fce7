//! Start/stop command dispatcher.
//!
//! Drives one invocation: probe the recording state, send the hotkey chord,
//! wait, then move (and optionally transcode) the finished recording.

use crate::{
    ControlError, CoreResult, ExclusiveFileProbe, HotkeyKey, KeyInjector, ProcessRunner,
    WindowLister,
    destination::{DestinationVars, destination_path},
    hotkey::{DEFAULT_KEY_SETTLE_DELAY, send_hotkey},
    recorder::{RecorderLayout, locate_source},
    transcode::{TranscodeSettings, transcode},
};

use std::{
    fmt, fs,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Wait between the stop request and the stop hotkey.
///
/// The recorder keeps capturing the end-of-match score screen meanwhile.
pub const DEFAULT_PRE_STOP_DELAY: Duration = Duration::from_secs(15);

/// Wait between the stop hotkey and the rename.
///
/// Gives the recorder time to finalize the file and release its lock.
pub const DEFAULT_POST_STOP_DELAY: Duration = Duration::from_secs(10);

/// The two operations the tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Begin a recording.
    Start,
    /// End the current recording and collect its file.
    Stop,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Start => f.write_str("start"),
            Operation::Stop => f.write_str("stop"),
        }
    }
}

/// Everything the dispatcher needs to know up front.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Keys of the recorder's start/stop hotkey.
    pub hotkey: Vec<HotkeyKey>,
    /// Hold time between pressing and releasing the chord.
    pub key_settle_delay: Duration,
    /// Wait before sending the stop hotkey.
    pub pre_stop_delay: Duration,
    /// Wait after the stop hotkey before touching the file.
    pub post_stop_delay: Duration,
    /// Recorder window and output naming.
    pub layout: RecorderLayout,
    /// Directory the recorder writes into.
    pub source_dir: PathBuf,
    /// Where finished recordings go.
    pub destination: DestinationVars,
    /// Post-move transcoding.
    pub transcode: TranscodeSettings,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            hotkey: HotkeyKey::default_chord(),
            key_settle_delay: DEFAULT_KEY_SETTLE_DELAY,
            pre_stop_delay: DEFAULT_PRE_STOP_DELAY,
            post_stop_delay: DEFAULT_POST_STOP_DELAY,
            layout: RecorderLayout::default(),
            source_dir: PathBuf::new(),
            destination: DestinationVars::default(),
            transcode: TranscodeSettings::default(),
        }
    }
}

/// What happened to the recording file after the stop hotkey.
#[derive(Debug)]
pub enum FinalizeOutcome {
    /// No destination was configured, the file was left in place.
    Skipped,
    /// The file was moved to its destination.
    Moved {
        /// Final location of the recording.
        destination: PathBuf,
    },
    /// The file was moved, transcoded, and the intermediate removed.
    Transcoded {
        /// Transcoded output.
        output: PathBuf,
    },
    /// A directory, rename, transcode, or cleanup step failed.
    Failed {
        /// The failing step's error.
        error: ControlError,
    },
}

impl FinalizeOutcome {
    /// Whether a finalize step failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, FinalizeOutcome::Failed { .. })
    }
}

/// Result of a completed `stop`.
#[derive(Debug)]
pub struct StopReport {
    /// Recorder output file captured before the stop hotkey.
    pub source: PathBuf,
    /// Destination captured before the stop hotkey, if resolvable.
    pub destination: Option<PathBuf>,
    /// Outcome of the move and transcode steps.
    pub finalize: FinalizeOutcome,
}

/// Result of a dispatched operation.
#[derive(Debug)]
pub enum DispatchReport {
    /// The start hotkey was sent.
    Started,
    /// The stop hotkey was sent.
    Stopped(StopReport),
}

/// Runs `start` and `stop` against the given OS capabilities.
pub struct Dispatcher<W, K, P, R> {
    config: DispatcherConfig,
    windows: W,
    keys: K,
    probe: P,
    runner: R,
}

impl<W, K, P, R> Dispatcher<W, K, P, R>
where
    W: WindowLister,
    K: KeyInjector,
    P: ExclusiveFileProbe,
    R: ProcessRunner,
{
    /// Create a dispatcher from its configuration and capabilities.
    pub fn new(config: DispatcherConfig, windows: W, keys: K, probe: P, runner: R) -> Self {
        Self {
            config,
            windows,
            keys,
            probe,
            runner,
        }
    }

    /// Run one operation.
    pub fn dispatch(&mut self, operation: Operation) -> CoreResult<DispatchReport> {
        match operation {
            Operation::Start => self.start().map(|()| DispatchReport::Started),
            Operation::Stop => self.stop().map(DispatchReport::Stopped),
        }
    }

    /// Send the start hotkey unless a recording is already in progress.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start(&mut self) -> CoreResult<()> {
        if let Some(path) = self.recording_source()? {
            return Err(ControlError::AlreadyRecording {
                path,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.send_hotkey()?;

        info!("Start hotkey sent");

        Ok(())
    }

    /// Stop the current recording and collect its file.
    ///
    /// Source and destination are captured before the first wait, since the
    /// recorder's window title changes once it stops. Finalize failures are
    /// reported in the returned [`StopReport`], not as an `Err`.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> CoreResult<StopReport> {
        let Some(source) = self.recording_source()? else {
            return Err(ControlError::NotRecording {
                location: ErrorLocation::from(Location::caller()),
            });
        };
        let destination = destination_path(&self.config.destination, &self.config.layout.extension);

        info!(
            source = ?source,
            destination = ?destination,
            delay_ms = self.config.pre_stop_delay.as_millis(),
            "Waiting before stop hotkey"
        );
        sleep(self.config.pre_stop_delay);

        self.send_hotkey()?;
        info!("Stop hotkey sent");

        let finalize = match destination.as_deref() {
            None => {
                info!("No destination configured, leaving recording in place");
                FinalizeOutcome::Skipped
            }
            Some(destination) => {
                sleep(self.config.post_stop_delay);
                match self.finalize(&source, destination) {
                    Ok(outcome) => outcome,
                    Err(error) => {
                        warn!(error = ?error, "Failed to finalize recording");
                        FinalizeOutcome::Failed { error }
                    }
                }
            }
        };

        Ok(StopReport {
            source,
            destination,
            finalize,
        })
    }

    /// Recorder output file, if the recorder currently holds it locked.
    #[instrument(skip(self))]
    pub fn recording_source(&mut self) -> CoreResult<Option<PathBuf>> {
        let source = locate_source(
            &mut self.windows,
            &self.config.source_dir,
            &self.config.layout,
        )?;

        Ok(source.filter(|path| self.probe.is_locked(path)))
    }

    fn send_hotkey(&mut self) -> CoreResult<()> {
        send_hotkey(
            &mut self.keys,
            &self.config.hotkey,
            self.config.key_settle_delay,
        )
    }

    #[track_caller]
    fn finalize(&mut self, source: &Path, destination: &Path) -> CoreResult<FinalizeOutcome> {
        if let Some(parent) = destination
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent)?;
        }

        fs::rename(source, destination).map_err(|source_err| ControlError::MoveFailed {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            source: source_err,
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(destination = ?destination, "Recording moved");

        if !self.config.transcode.enabled {
            return Ok(FinalizeOutcome::Moved {
                destination: destination.to_path_buf(),
            });
        }

        let output = transcode(&mut self.runner, &self.config.transcode, destination)?;

        Ok(FinalizeOutcome::Transcoded { output })
    }
}

fn sleep(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}
