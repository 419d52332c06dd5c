//! User input and interaction handling.

use dialoguer::{Input, Select};

use crate::error::{Error, Result};

/// Trait for interactive answer prompting.
pub trait Prompter {
    /// Asks for free text, offering `default` as the pre-filled value.
    fn input(&self, help: &str, default: String) -> Result<String>;

    /// Asks to pick one of `choices`, with `default` pre-selected.
    fn select(&self, help: &str, choices: &[&str], default: usize) -> Result<String>;
}

/// Dialoguer-based terminal prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, help: &str, default: String) -> Result<String> {
        Input::new()
            .with_prompt(help)
            .default(default)
            .interact_text()
            .map_err(|e| Error::ConfigError(e.to_string()))
    }

    fn select(&self, help: &str, choices: &[&str], default: usize) -> Result<String> {
        let selection = Select::new()
            .with_prompt(help)
            .default(default)
            .items(choices)
            .interact()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        Ok(choices[selection].to_string())
    }
}
