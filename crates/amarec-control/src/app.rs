use crate::{
    AppResult, Environment, config::Config, diagnostics,
    platform::{EnigoKeyInjector, SystemWindowLister},
};

use amarec_control_core::{
    CommandRunner, ControlError, DispatchReport, Dispatcher, FinalizeOutcome, OpenForWriteProbe,
    Operation,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Exit code for success.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for usage errors, state-precondition errors, and OS failures.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a failed move or transcode when strict mode is on.
pub const EXIT_FINALIZE_FAILED: u8 = 2;

/// One invocation of the tool.
pub struct App {
    pub(crate) config: Config,
    pub(crate) environment: Environment,
    pub(crate) invocation_id: Uuid,
}

impl App {
    /// Create an invocation from loaded config and the current environment.
    pub(crate) fn new(config: Config, environment: Environment) -> Self {
        Self {
            config,
            environment,
            invocation_id: Uuid::new_v4(),
        }
    }

    /// Run `operation` against the real recorder and return the exit code.
    #[instrument(skip(self), fields(invocation_id = %self.invocation_id))]
    pub(crate) fn run(self, operation: Operation) -> u8 {
        let result = self.dispatch(operation);
        exit_code(&result, self.config.behavior.fail_on_finalize_error)
    }

    fn dispatch(&self, operation: Operation) -> AppResult<DispatchReport> {
        let mut windows = SystemWindowLister;
        let probe = OpenForWriteProbe;

        if self.config.logging.debug_log {
            diagnostics::log_snapshot(&mut windows, &probe, &self.environment, &self.config);
        }

        let keys = EnigoKeyInjector::new()?;
        let mut dispatcher = Dispatcher::new(
            self.config.dispatcher_config(&self.environment),
            windows,
            keys,
            probe,
            CommandRunner,
        );

        info!(operation = %operation, "Dispatching");

        Ok(dispatcher.dispatch(operation)?)
    }
}

/// Map a dispatch result onto the process exit code, logging the outcome.
///
/// Finalize failures only change the exit code when `strict` is set.
pub(crate) fn exit_code(result: &AppResult<DispatchReport>, strict: bool) -> u8 {
    match result {
        Ok(DispatchReport::Started) => EXIT_SUCCESS,
        Ok(DispatchReport::Stopped(report)) => match &report.finalize {
            FinalizeOutcome::Failed { error } => {
                warn!(error = %error, "Recording stopped but could not be finalized");
                if strict {
                    EXIT_FINALIZE_FAILED
                } else {
                    EXIT_SUCCESS
                }
            }
            FinalizeOutcome::Skipped
            | FinalizeOutcome::Moved { .. }
            | FinalizeOutcome::Transcoded { .. } => EXIT_SUCCESS,
        },
        Err(e) => {
            match e.control() {
                Some(ControlError::AlreadyRecording { path, .. }) => {
                    warn!(path = ?path, "Already recording, start ignored");
                }
                Some(ControlError::NotRecording { .. }) => {
                    warn!("Not recording, stop ignored");
                }
                _ => error!(error = %e, "Operation failed"),
            }
            EXIT_FAILURE
        }
    }
}
