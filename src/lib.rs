//! Plugsmith scaffolds ready-to-build Obsidian plugin projects from a
//! built-in template: it collects and validates a small set of parameters,
//! materializes the template tree with placeholder substitution, and prunes
//! the parts belonging to disabled optional features.

/// Command-line interface module for the Plugsmith application
pub mod cli;

/// Answer collection for the built-in template
/// Prompt definitions, defaults, user configuration and replay handling
pub mod config;

/// Error types and handling for the Plugsmith application
pub mod error;

/// Pre and post generation hook processing
/// The validator runs before any file is written; the pruner runs after
/// the full tree has been materialized
pub mod hooks;

/// Core template expansion orchestration
/// Combines all components to generate the final project tree
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Post-generation removal of disabled optional features
pub mod prune;

/// Template rendering functionality
pub mod renderer;

/// The built-in plugin project template
pub mod template;

/// Field validation rules enforced before generation
pub mod validation;
