use crate::{
    ControlError, TranscodeSettings,
    tests::fakes::{Event, EventLog, FakeRunner},
    transcode::transcode,
};

use std::{ffi::OsString, path::PathBuf};

/// WHAT: Placeholders expand to the input and output paths
/// WHY: The transcoder receives the moved file and the swapped-extension output
#[test]
fn given_template_when_expanding_then_placeholders_replaced() {
    // Given: A template with standalone and embedded placeholders
    let settings = TranscodeSettings {
        args: vec![
            "-i".to_string(),
            "{input}".to_string(),
            "--log={output}.log".to_string(),
            "{output}".to_string(),
        ],
        ..TranscodeSettings::default()
    };
    let input = PathBuf::from("videos/game.avi");
    let output = PathBuf::from("videos/game.mp4");

    // When: Expanding
    let args = settings.expand_args(&input, &output);

    // Then: Each placeholder is substituted
    assert_eq!(
        args,
        vec![
            OsString::from("-i"),
            OsString::from("videos/game.avi"),
            OsString::from("--log=videos/game.mp4.log"),
            OsString::from("videos/game.mp4"),
        ]
    );
}

/// WHAT: Successful transcode removes the intermediate file
/// WHY: Only the delivery format should remain
#[test]
#[allow(clippy::unwrap_used)]
fn given_successful_transcoder_when_transcoding_then_intermediate_removed() {
    // Given: An intermediate AVI and a succeeding runner
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("game.avi");
    std::fs::write(&input, b"avi").unwrap();
    let log = EventLog::default();
    let mut runner = FakeRunner::new(&log);
    let settings = TranscodeSettings {
        enabled: true,
        ..TranscodeSettings::default()
    };

    // When: Transcoding
    let output = transcode(&mut runner, &settings, &input).unwrap();

    // Then: ffmpeg ran once, the MP4 exists and the AVI is gone
    assert_eq!(output, dir.path().join("game.mp4"));
    assert!(output.exists());
    assert!(!input.exists());
    let runs: Vec<_> = log
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::Run { .. }))
        .collect();
    assert_eq!(runs.len(), 1);
    assert!(matches!(&runs[0], Event::Run { program, .. } if program == &PathBuf::from("ffmpeg")));
}

/// WHAT: Failed transcode keeps the intermediate file
/// WHY: Deleting the only copy after a failed encode would lose the recording
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_transcoder_when_transcoding_then_intermediate_kept() {
    // Given: A runner that exits with code 1
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("game.avi");
    std::fs::write(&input, b"avi").unwrap();
    let log = EventLog::default();
    let mut runner = FakeRunner::new(&log);
    runner.exit_code = Some(1);

    // When: Transcoding
    let result = transcode(&mut runner, &TranscodeSettings::default(), &input);

    // Then: TranscodeFailed and the AVI survives
    assert!(matches!(result, Err(ControlError::TranscodeFailed { .. })));
    assert!(input.exists());
}

/// WHAT: Output extension equal to the input's is rejected before running
/// WHY: The transcoder would overwrite the input and cleanup would delete the only copy
#[test]
#[allow(clippy::unwrap_used)]
fn given_output_extension_same_as_input_when_transcoding_then_rejected_and_input_kept() {
    // Given: An intermediate AVI and settings that transcode to AVI
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("game.avi");
    std::fs::write(&input, b"avi").unwrap();
    let log = EventLog::default();
    let mut runner = FakeRunner::new(&log);
    let settings = TranscodeSettings {
        enabled: true,
        output_extension: "avi".to_string(),
        ..TranscodeSettings::default()
    };

    // When: Transcoding
    let result = transcode(&mut runner, &settings, &input);

    // Then: TranscodeFailed, the transcoder never ran, the AVI is intact
    assert!(matches!(result, Err(ControlError::TranscodeFailed { .. })));
    assert!(log.events().is_empty());
    assert_eq!(std::fs::read(&input).unwrap(), b"avi");
}
