//! External transcoder invocation.

use crate::{
    ControlError, CoreResult, ProcessRunner, destination::DEFAULT_DELIVERY_EXTENSION,
    destination::transcoded_path,
};

use std::{
    ffi::OsString,
    fs,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use tracing::{info, instrument, warn};

/// Placeholder replaced with the intermediate recording path.
pub const INPUT_PLACEHOLDER: &str = "{input}";

/// Placeholder replaced with the transcoded output path.
pub const OUTPUT_PLACEHOLDER: &str = "{output}";

/// How and whether to transcode finished recordings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeSettings {
    /// Run the transcoder after the recording is moved.
    pub enabled: bool,
    /// Transcoder executable, resolved through `PATH` when not absolute.
    pub program: PathBuf,
    /// Argument template. `{input}` and `{output}` are substituted.
    pub args: Vec<String>,
    /// Delivery extension, without the dot.
    pub output_extension: String,
}

impl TranscodeSettings {
    /// Default ffmpeg argument template (H.264 video, AAC audio).
    pub fn default_args() -> Vec<String> {
        [
            "-y",
            "-i",
            INPUT_PLACEHOLDER,
            "-c:v",
            "libx264",
            "-preset",
            "veryfast",
            "-crf",
            "23",
            "-c:a",
            "aac",
            "-b:a",
            "128k",
            OUTPUT_PLACEHOLDER,
        ]
        .iter()
        .map(|arg| arg.to_string())
        .collect()
    }

    /// Expand the argument template for one input/output pair.
    pub fn expand_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        self.args
            .iter()
            .map(|arg| match arg.as_str() {
                INPUT_PLACEHOLDER => input.as_os_str().to_os_string(),
                OUTPUT_PLACEHOLDER => output.as_os_str().to_os_string(),
                other => OsString::from(
                    other
                        .replace(INPUT_PLACEHOLDER, &input.to_string_lossy())
                        .replace(OUTPUT_PLACEHOLDER, &output.to_string_lossy()),
                ),
            })
            .collect()
    }
}

impl Default for TranscodeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            program: PathBuf::from("ffmpeg"),
            args: Self::default_args(),
            output_extension: DEFAULT_DELIVERY_EXTENSION.to_string(),
        }
    }
}

/// Transcode `input`, then delete it.
///
/// Blocks until the transcoder exits. On a nonzero exit the intermediate
/// file is kept and `TranscodeFailed` is returned. An output extension equal
/// to the input's is rejected before the transcoder runs.
#[track_caller]
#[instrument(skip(runner, settings))]
pub fn transcode<R: ProcessRunner + ?Sized>(
    runner: &mut R,
    settings: &TranscodeSettings,
    input: &Path,
) -> CoreResult<PathBuf> {
    let output = transcoded_path(input, &settings.output_extension);
    if output == input {
        return Err(ControlError::TranscodeFailed {
            reason: format!(
                "Output extension {:?} would overwrite the input {:?}",
                settings.output_extension, input
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let args = settings.expand_args(input, &output);

    info!(program = ?settings.program, output = ?output, "Transcoding recording");

    let exit = runner.run(&settings.program, &args)?;
    if !exit.success() {
        warn!(code = ?exit.code, input = ?input, "Transcoder failed, keeping intermediate file");
        return Err(ControlError::TranscodeFailed {
            reason: format!("{:?} exited with {:?}", settings.program, exit.code),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    fs::remove_file(input)?;

    info!(output = ?output, "Transcode complete, intermediate removed");

    Ok(output)
}
