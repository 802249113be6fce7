use crate::destination::{DestinationVars, destination_path, transcoded_path};

use std::path::{Path, PathBuf};

fn vars(dir: Option<&str>, name: Option<&str>) -> DestinationVars {
    DestinationVars {
        dest_dir: dir.map(PathBuf::from),
        dest_name: name.map(str::to_string),
    }
}

/// WHAT: Destination forces the recorder container extension
/// WHY: The recorder writes AVI regardless of the requested name
#[test]
fn given_dir_and_name_when_resolving_then_extension_forced() {
    // Given: Directory and a name with a foreign extension
    let vars = vars(Some("videos"), Some("20250101_match.mp4"));

    // When: Resolving the destination
    let path = destination_path(&vars, "avi");

    // Then: Extension replaced with .avi
    assert_eq!(path, Some(PathBuf::from("videos").join("20250101_match.avi")));
}

/// WHAT: Only the final component of the requested name is used
/// WHY: The name must not escape the destination directory
#[test]
fn given_name_with_directories_when_resolving_then_file_name_only() {
    // Given: A name carrying parent directories
    let vars = vars(Some("videos"), Some("../elsewhere/game"));

    // When/Then: Only `game` is kept
    assert_eq!(
        destination_path(&vars, "avi"),
        Some(PathBuf::from("videos").join("game.avi"))
    );
}

/// WHAT: Missing or empty variables leave the destination unresolved
/// WHY: Without both values the recording stays where the recorder wrote it
#[test]
fn given_missing_vars_when_resolving_then_none() {
    assert_eq!(destination_path(&vars(None, None), "avi"), None);
    assert_eq!(destination_path(&vars(Some("videos"), None), "avi"), None);
    assert_eq!(destination_path(&vars(None, Some("game")), "avi"), None);
    assert_eq!(destination_path(&vars(Some(""), Some("game")), "avi"), None);
    assert_eq!(destination_path(&vars(Some("videos"), Some("")), "avi"), None);
    assert_eq!(destination_path(&vars(Some("videos"), Some("..")), "avi"), None);
}

/// WHAT: Transcoded path swaps the extension
/// WHY: Transcoder output sits next to the intermediate file
#[test]
fn given_destination_when_deriving_transcoded_then_extension_swapped() {
    assert_eq!(
        transcoded_path(Path::new("videos/game.avi"), "mp4"),
        PathBuf::from("videos/game.mp4")
    );
}
