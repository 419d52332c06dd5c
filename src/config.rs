//! Answer collection for the built-in template.
//!
//! The questions form a fixed, ordered table. A later default may reference
//! earlier answers as a template expression, so defaults are rendered
//! incrementally against the answers collected so far. A `--config-file`
//! overlay replaces defaults without removing the prompt, and `--replay`
//! reuses the answers persisted by the previous successful run.

use chrono::{Datelike, Utc};
use cruet::Inflector;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;

/// A single prompt definition. A non-empty `choices` list turns the
/// question into a selection, otherwise free text is accepted.
#[derive(Debug)]
pub struct Question {
    pub key: &'static str,
    pub help: &'static str,
    pub default: &'static str,
    pub choices: &'static [&'static str],
}

/// License identifiers offered during generation; "none" skips the file.
pub const LICENSE_CHOICES: &[&str] =
    &["MIT", "Apache-2.0", "BSD-3-Clause", "GPL-3.0", "ISC", "none"];

/// Prompted in this order. Defaults may interpolate earlier answers.
pub const QUESTIONS: &[Question] = &[
    Question {
        key: "plugin_name",
        help: "Plugin name",
        default: "Obsidian Plugin",
        choices: &[],
    },
    Question {
        key: "plugin_id",
        help: "Plugin id (folder and manifest id)",
        default: "{{ plugin_name|lower|replace(' ', '-') }}",
        choices: &[],
    },
    Question {
        key: "description",
        help: "Short description",
        default: "A minimal Obsidian plugin",
        choices: &[],
    },
    Question {
        key: "author_name",
        help: "Author name",
        default: "Your Name",
        choices: &[],
    },
    Question {
        key: "repo_url",
        help: "Repository URL",
        default: "https://github.com/{{ author_name|lower|replace(' ', '') }}/{{ plugin_id }}",
        choices: &[],
    },
    Question {
        key: "min_obsidian_version",
        help: "Minimum Obsidian version",
        default: "1.5.0",
        choices: &[],
    },
    Question {
        key: "node_version",
        help: "Node.js major version",
        default: "20",
        choices: &[],
    },
    Question { key: "license", help: "License", default: "MIT", choices: LICENSE_CHOICES },
    Question {
        key: "enable_vitest",
        help: "Set up Vitest testing",
        default: "yes",
        choices: &["yes", "no"],
    },
    Question {
        key: "enable_i18n",
        help: "Set up i18n scaffolding",
        default: "no",
        choices: &["yes", "no"],
    },
];

/// User configuration file contents (`--config-file`).
#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    /// Values overriding the built-in question defaults, keyed by question.
    #[serde(default)]
    pub default_context: IndexMap<String, String>,
}

/// Loads the user configuration, or an empty one when no file was given.
pub fn load_user_config(config_file: Option<&Path>) -> Result<UserConfig> {
    let Some(path) = config_file else {
        return Ok(UserConfig::default());
    };
    debug!("Loading user configuration from {}", path.display());
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))
}

/// Collects the answers for every question, in declaration order.
///
/// The effective default for each question is the `default_context` override
/// when present, otherwise the built-in default rendered against the answers
/// collected so far. With `no_input` the effective default is taken as the
/// answer; otherwise the user is prompted with it.
pub fn get_answers(
    engine: &dyn TemplateRenderer,
    prompt: &dyn Prompter,
    overrides: &IndexMap<String, String>,
    no_input: bool,
) -> Result<serde_json::Value> {
    let mut answers = serde_json::Map::new();

    for question in QUESTIONS {
        let current_context = serde_json::Value::Object(answers.clone());

        let default_value = match overrides.get(question.key) {
            Some(value) => value.clone(),
            None => engine.render(question.default, &current_context)?,
        };

        let value = if no_input {
            default_value
        } else if question.choices.is_empty() {
            prompt.input(question.help, default_value)?
        } else {
            let default_index = question
                .choices
                .iter()
                .position(|choice| *choice == default_value)
                .unwrap_or(0);
            prompt.select(question.help, question.choices, default_index)?
        };

        answers.insert(question.key.to_string(), serde_json::Value::String(value));
    }

    Ok(serde_json::Value::Object(answers))
}

/// Adds the context values derived from the answers rather than prompted:
/// the PascalCase plugin class name and the current copyright year.
pub fn with_derived_context(mut answers: serde_json::Value) -> serde_json::Value {
    if let Some(map) = answers.as_object_mut() {
        let plugin_class = map
            .get("plugin_name")
            .and_then(|v| v.as_str())
            .map(|name| name.to_pascal_case())
            .unwrap_or_default();
        map.insert("plugin_class".to_string(), serde_json::Value::String(plugin_class));
        map.insert(
            "year".to_string(),
            serde_json::Value::String(Utc::now().year().to_string()),
        );
    }
    answers
}

/// Where the answers of the last successful run are recorded.
pub fn replay_file() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| Error::ConfigError("Cannot determine the home directory".to_string()))?;
    Ok(home.join(".plugsmith").join("replay.json"))
}

/// Loads replay answers from the given file.
pub fn load_replay_from(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        return Err(Error::ConfigError(
            "No replay answers recorded yet; run once without --replay".to_string(),
        ));
    }
    let content = fs::read_to_string(path)?;
    let answers: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Invalid replay file: {e}")))?;
    if !answers.is_object() {
        return Err(Error::ConfigError("Invalid replay file: expected an object".to_string()));
    }
    Ok(answers)
}

/// Records the answers of a successful run for later `--replay`.
pub fn save_replay_to(path: &Path, answers: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(answers)
        .map_err(|e| Error::ConfigError(format!("Cannot serialize replay answers: {e}")))?;
    fs::write(path, content)?;
    Ok(())
}
