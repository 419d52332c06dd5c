//! Pre and post generation hook processing.
//!
//! The hooks are the thin adapter between the pure rules and the expansion
//! engine: the pre-generation hook turns the first violated field constraint
//! into a rejection of the whole run, and the post-generation hook prunes
//! disabled optional features from the finished tree.

use std::path::Path;

use crate::error::{Error, Result};
use crate::prune;
use crate::validation;

/// Runs the pre-generation hook over the collected answers.
///
/// A failing field check rejects the run before any file is written. The
/// failure surfaces as [`Error::HookRejected`], whose display carries the
/// `Hook script failed` marker with the field message embedded.
pub fn run_pre_gen_hook(answers: &serde_json::Value) -> Result<()> {
    validation::validate_answers(answers).map_err(Error::HookRejected)
}

/// Runs the post-generation hook over the generated project tree.
///
/// An unexpected I/O failure while pruning is fatal and leaves a partially
/// pruned tree behind; the caller must not accept that output.
pub fn run_post_gen_hook(project_root: &Path, answers: &serde_json::Value) -> Result<()> {
    prune::prune(project_root, answers)
}
