//! Post-generation removal of disabled optional features.
//!
//! After the full project tree has been materialized, every feature the
//! caller disabled is pruned by deleting the paths it controls. The mapping
//! of flag to controlled paths is a closed table: adding an optional feature
//! means adding one row here plus its template files, never touching the
//! pruning logic itself.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// An optional feature toggle and the generated paths it controls.
#[derive(Debug)]
pub struct Feature {
    pub flag: &'static str,
    pub paths: &'static [&'static str],
}

/// Flag to controlled-paths mapping, resolved relative to the project root.
pub const OPTIONAL_FEATURES: &[Feature] = &[
    Feature { flag: "enable_vitest", paths: &["vitest.config.ts", "tests"] },
    Feature { flag: "enable_i18n", paths: &["src/i18n", "locales"] },
];

/// The license file, removed when no license is selected.
pub const LICENSE_FILE: &str = "LICENSE";

/// License selector value meaning "do not ship a license file".
pub const NO_LICENSE: &str = "none";

/// Removes a single file or a directory subtree.
/// Removing a path that does not exist is a no-op, never an error.
pub fn remove_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else if path.is_file() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Interprets a textual feature toggle. Only "yes" (case-insensitive)
/// enables a feature; anything else, including an absent value, disables it.
pub fn is_enabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("yes"))
}

/// Deletes the controlled paths of every disabled feature from the generated
/// tree, plus the license file when no license was selected. Only deletes:
/// never creates, renames, or edits file contents.
pub fn prune(project_root: &Path, answers: &serde_json::Value) -> Result<()> {
    for feature in OPTIONAL_FEATURES {
        let value = answers.get(feature.flag).and_then(|v| v.as_str());
        if is_enabled(value) {
            continue;
        }
        for relative in feature.paths {
            debug!("Pruning '{}' ('{}' is disabled)", relative, feature.flag);
            remove_path(project_root.join(relative))?;
        }
    }

    let license =
        answers.get("license").and_then(|v| v.as_str()).unwrap_or(NO_LICENSE);
    if license == NO_LICENSE {
        debug!("Pruning '{LICENSE_FILE}' (no license selected)");
        remove_path(project_root.join(LICENSE_FILE))?;
    }

    Ok(())
}
