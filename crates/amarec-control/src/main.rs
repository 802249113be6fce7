//! AmaRec-Control: start and stop AmaRecTV recording from the command line.

mod app;
mod cli;
mod config;
mod diagnostics;
mod environment;
mod error;
mod logging;
mod platform;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    environment::Environment,
    error::{AppError, Result as AppResult},
};

use crate::{app::EXIT_FAILURE, config::Config};

use std::process::ExitCode;


/// Application entry point.
fn main() -> ExitCode {
    // Usage errors exit 1 before anything else runs.
    let operation = match cli::parse_args(std::env::args_os()) {
        Ok(operation) => operation,
        Err(code) => return ExitCode::from(code),
    };

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let _log_guard = match logging::init_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let app = App::new(config, Environment::from_env());
    ExitCode::from(app.run(operation))
}
