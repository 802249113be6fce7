//! Recorder window matching and source path derivation.
//!
//! The recorder shows the file it is writing in its window title, e.g.
//! `"AmaRecTV  game2.avi"`. The part after the fixed prefix is the output
//! file name inside the recorder output directory.

use crate::{CoreResult, WindowLister};

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

/// Title prefix of the recorder's main window.
pub const DEFAULT_TITLE_PREFIX: &str = "AmaRecTV  ";

/// Container extension the recorder writes, without the dot.
pub const DEFAULT_RECORDER_EXTENSION: &str = "avi";

/// How the recorder names its window and its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderLayout {
    /// Fixed prefix every recorder window title starts with.
    pub title_prefix: String,
    /// Output container extension, without the dot.
    pub extension: String,
}

impl Default for RecorderLayout {
    fn default() -> Self {
        Self {
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            extension: DEFAULT_RECORDER_EXTENSION.to_string(),
        }
    }
}

/// Pick the recorder window among `titles`.
///
/// When several windows match, the lexicographically greatest title wins.
pub fn select_recorder_title<S: AsRef<str>>(titles: &[S], prefix: &str) -> Option<String> {
    titles
        .iter()
        .map(AsRef::as_ref)
        .filter(|title| title.starts_with(prefix))
        .max()
        .map(str::to_string)
}

/// Derive the recorder output file from its window title.
///
/// Returns `None` unless the title carries the prefix, ends with the
/// recorder extension, and leaves at least one character of file name.
pub fn source_path(title: &str, source_dir: &Path, layout: &RecorderLayout) -> Option<PathBuf> {
    let file_name = title.strip_prefix(layout.title_prefix.as_str())?;
    let suffix = format!(".{}", layout.extension);

    if file_name.chars().count() <= suffix.chars().count() || !file_name.ends_with(&suffix) {
        return None;
    }

    Some(source_dir.join(file_name))
}

/// Enumerate windows and resolve the recorder output file in one step.
#[instrument(skip(lister))]
pub fn locate_source<L: WindowLister + ?Sized>(
    lister: &mut L,
    source_dir: &Path,
    layout: &RecorderLayout,
) -> CoreResult<Option<PathBuf>> {
    let titles = lister.window_titles()?;
    let Some(title) = select_recorder_title(&titles, &layout.title_prefix) else {
        debug!(window_count = titles.len(), "No recorder window found");
        return Ok(None);
    };

    let path = source_path(&title, source_dir, layout);
    debug!(title = %title, source = ?path, "Recorder window matched");

    Ok(path)
}
