use crate::{
    AppError,
    app::{EXIT_FAILURE, EXIT_FINALIZE_FAILED, EXIT_SUCCESS, exit_code},
};

use amarec_control_core::{ControlError, DispatchReport, FinalizeOutcome, StopReport};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;

fn stopped(finalize: FinalizeOutcome) -> DispatchReport {
    DispatchReport::Stopped(StopReport {
        source: PathBuf::from("game.avi"),
        destination: Some(PathBuf::from("out/match.avi")),
        finalize,
    })
}

fn transcode_failure() -> FinalizeOutcome {
    FinalizeOutcome::Failed {
        error: ControlError::TranscodeFailed {
            reason: "exit 1".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    }
}

/// WHAT: Successful operations exit 0
/// WHY: The caller treats 0 as "hotkey sent"
#[test]
fn given_successful_dispatch_when_mapping_then_exit_success() {
    assert_eq!(exit_code(&Ok(DispatchReport::Started), false), EXIT_SUCCESS);
    assert_eq!(
        exit_code(&Ok(stopped(FinalizeOutcome::Skipped)), true),
        EXIT_SUCCESS
    );
    assert_eq!(
        exit_code(
            &Ok(stopped(FinalizeOutcome::Moved {
                destination: PathBuf::from("out/match.avi")
            })),
            true
        ),
        EXIT_SUCCESS
    );
}

/// WHAT: Precondition failures exit 1
/// WHY: start-while-recording and stop-while-idle are reported to the caller
#[test]
fn given_precondition_error_when_mapping_then_exit_failure() {
    let not_recording: Result<DispatchReport, AppError> = Err(AppError::from(
        ControlError::NotRecording {
            location: ErrorLocation::from(Location::caller()),
        },
    ));
    let already_recording: Result<DispatchReport, AppError> = Err(AppError::from(
        ControlError::AlreadyRecording {
            path: PathBuf::from("game.avi"),
            location: ErrorLocation::from(Location::caller()),
        },
    ));

    assert_eq!(exit_code(&not_recording, false), EXIT_FAILURE);
    assert_eq!(exit_code(&already_recording, false), EXIT_FAILURE);
}

/// WHAT: Finalize failures exit 0 by default
/// WHY: The stop hotkey was sent, callers rely on the historical exit code
#[test]
fn given_finalize_failure_when_not_strict_then_exit_success() {
    assert_eq!(
        exit_code(&Ok(stopped(transcode_failure())), false),
        EXIT_SUCCESS
    );
}

/// WHAT: Finalize failures exit 2 in strict mode
/// WHY: Strict callers want to know the file did not land
#[test]
fn given_finalize_failure_when_strict_then_exit_finalize_failed() {
    assert_eq!(
        exit_code(&Ok(stopped(transcode_failure())), true),
        EXIT_FINALIZE_FAILED
    );
}
