use crate::{
    Environment,
    environment::{DEST_DIR_VAR, DEST_NAME_VAR, INFO_VARS},
};

use std::{collections::HashMap, ffi::OsString, path::PathBuf};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
    let map: HashMap<String, OsString> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), OsString::from(v)))
        .collect();
    move |name: &str| map.get(name).cloned()
}

/// WHAT: Destination variables are read into the destination
/// WHY: The caller names each recording through these two variables
#[test]
fn given_destination_vars_when_reading_then_destination_set() {
    // Given: Both destination variables and one match variable
    let environment = Environment::from_lookup(lookup(&[
        (DEST_DIR_VAR, "D:\\videos"),
        (DEST_NAME_VAR, "0101_tower"),
        ("IKALOG_STAGE", "tower"),
    ]));

    // Then: Destination populated, info keeps every name in order
    assert_eq!(
        environment.destination.dest_dir,
        Some(PathBuf::from("D:\\videos"))
    );
    assert_eq!(
        environment.destination.dest_name.as_deref(),
        Some("0101_tower")
    );
    assert_eq!(environment.info.len(), INFO_VARS.len());
    assert_eq!(
        environment.info[0],
        ("IKALOG_STAGE", Some("tower".to_string()))
    );
    assert!(environment.info[1..].iter().all(|(_, v)| v.is_none()));
}

/// WHAT: Empty destination variables count as unset
/// WHY: Callers clear a variable by setting it empty
#[test]
fn given_empty_destination_vars_when_reading_then_unset() {
    let environment = Environment::from_lookup(lookup(&[(DEST_DIR_VAR, ""), (DEST_NAME_VAR, "")]));

    assert_eq!(environment.destination.dest_dir, None);
    assert_eq!(environment.destination.dest_name, None);
}
