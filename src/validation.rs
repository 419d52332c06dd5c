//! Field validation rules enforced before generation.
//!
//! Each rule is a total function of a single raw string value: it either
//! accepts the value or reports the violated constraint as a human-readable
//! message. Emptiness is checked before the pattern so that a blank value
//! reports "cannot be empty" rather than a pattern mismatch. The rules carry
//! no I/O concerns; translating a failure into a process exit status is the
//! job of the hook-invocation boundary.

use regex::Regex;
use std::sync::LazyLock;

/// Outcome of a single field check: `Ok(())` or the violation message.
pub type Validation = std::result::Result<(), String>;

static PLUGIN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap());
static PLUGIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9\s\-_]*$").unwrap());
static MIN_OBSIDIAN_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap());
static REPO_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://github\.com/").unwrap());
static NODE_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Validates the plugin id used for the project folder and manifest id.
pub fn validate_plugin_id(raw: &str) -> Validation {
    if raw.trim().is_empty() {
        return Err("Plugin id cannot be empty".to_string());
    }
    if !PLUGIN_ID.is_match(raw.trim()) {
        return Err(
            "Plugin id must start with a letter and contain only lowercase letters, numbers, and hyphens"
                .to_string(),
        );
    }
    Ok(())
}

/// Validates the plugin display name.
pub fn validate_plugin_name(raw: &str) -> Validation {
    if raw.trim().is_empty() {
        return Err("Plugin name cannot be empty".to_string());
    }
    if !PLUGIN_NAME.is_match(raw.trim()) {
        return Err(
            "Plugin name must start with a letter and contain only letters, numbers, spaces, hyphens, and underscores"
                .to_string(),
        );
    }
    Ok(())
}

/// Validates the minimum Obsidian version string.
pub fn validate_min_obsidian_version(raw: &str) -> Validation {
    if raw.trim().is_empty() {
        return Err("Minimum Obsidian version cannot be empty".to_string());
    }
    if !MIN_OBSIDIAN_VERSION.is_match(raw.trim()) {
        return Err("Minimum Obsidian version must be in the format X.Y.Z".to_string());
    }
    Ok(())
}

/// Validates the repository URL.
pub fn validate_repo_url(raw: &str) -> Validation {
    if raw.trim().is_empty() {
        return Err("Repository URL cannot be empty".to_string());
    }
    if !REPO_URL.is_match(raw.trim()) {
        return Err(
            "Repository URL must be a GitHub HTTPS URL (https://github.com/...)".to_string()
        );
    }
    Ok(())
}

/// Validates the Node.js major version.
pub fn validate_node_version(raw: &str) -> Validation {
    if raw.trim().is_empty() {
        return Err("Node.js version cannot be empty".to_string());
    }
    if !NODE_VERSION.is_match(raw.trim()) {
        return Err("Node.js version must be a major version number (e.g., 20)".to_string());
    }
    Ok(())
}

/// The validated fields, in the order they are checked.
const VALIDATED_FIELDS: &[(&str, fn(&str) -> Validation)] = &[
    ("plugin_id", validate_plugin_id),
    ("plugin_name", validate_plugin_name),
    ("min_obsidian_version", validate_min_obsidian_version),
    ("repo_url", validate_repo_url),
    ("node_version", validate_node_version),
];

/// Checks every validated field in declared order, stopping at the first
/// failure. A field missing from the answer set is treated as empty.
pub fn validate_answers(answers: &serde_json::Value) -> Validation {
    for (key, validate) in VALIDATED_FIELDS {
        let raw = answers.get(*key).and_then(|value| value.as_str()).unwrap_or("");
        validate(raw)?;
    }
    Ok(())
}
