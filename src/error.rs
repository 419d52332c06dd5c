//! Error handling for the Plugsmith application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Plugsmith operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations,
    /// including failures while pruning the generated tree
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine itself
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents a rendered path that cannot be written
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors during configuration or replay file processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents a pre-generation hook rejecting the run.
    /// The embedded message names the first violated field constraint.
    #[error("Hook script failed: {0}")]
    HookRejected(String),

    /// The destination project directory already exists
    #[error("Output directory already exists: '{output_dir}'. Use --overwrite-if-exists to replace its files.")]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
