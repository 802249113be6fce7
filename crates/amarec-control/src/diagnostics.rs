//! Invocation snapshot for `debug.log`.
//!
//! Records everything the dispatcher will base its decision on, so a
//! misfired start or stop can be diagnosed after the match.

use crate::{Environment, config::Config};

use amarec_control_core::{
    ExclusiveFileProbe, WindowLister,
    destination::destination_path,
    recorder::{select_recorder_title, source_path},
};
use tracing::debug;

/// Log the command line, environment, windows, and derived paths.
pub(crate) fn log_snapshot<W, P>(
    windows: &mut W,
    probe: &P,
    environment: &Environment,
    config: &Config,
) where
    W: WindowLister + ?Sized,
    P: ExclusiveFileProbe + ?Sized,
{
    let command_line: Vec<String> = std::env::args().collect();
    debug!(command_line = ?command_line, "Invocation");

    debug!(
        dest_dir = ?environment.destination.dest_dir,
        dest_name = ?environment.destination.dest_name,
        "Destination variables"
    );
    for (name, value) in &environment.info {
        debug!(name = *name, value = ?value, "Match variable");
    }

    let titles = match windows.window_titles() {
        Ok(titles) => titles,
        Err(e) => {
            debug!(error = ?e, "Window enumeration failed");
            return;
        }
    };
    for title in &titles {
        debug!(title = %title, "Window");
    }

    let dispatcher_config = config.dispatcher_config(environment);
    let layout = &dispatcher_config.layout;
    let recorder_title = select_recorder_title(&titles, &layout.title_prefix);
    let source = recorder_title
        .as_deref()
        .and_then(|title| source_path(title, &dispatcher_config.source_dir, layout));
    let destination = destination_path(&dispatcher_config.destination, &layout.extension);
    let recording = source.as_deref().is_some_and(|path| probe.is_locked(path));

    debug!(
        recorder_title = ?recorder_title,
        source = ?source,
        destination = ?destination,
        recording,
        "Recorder snapshot"
    );
}
