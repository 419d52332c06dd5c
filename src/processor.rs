//! Core template expansion orchestration.
//!
//! Copies the built-in template tree into the destination directory,
//! substituting placeholders in file contents and in paths. The
//! pre-generation hook runs before anything is written, so a rejected run
//! leaves no project directory behind; the post-generation hook prunes
//! disabled optional features from the finished tree.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hooks;
use crate::renderer::TemplateRenderer;
use crate::template;

/// Flags controlling how the destination directory is populated.
#[derive(Debug)]
pub struct ExpandOptions<'a> {
    /// Parent directory the project directory is created in.
    pub output_dir: &'a Path,
    /// Proceed when the project directory already exists.
    pub overwrite_if_exists: bool,
    /// Leave already-existing files untouched instead of overwriting them.
    pub skip_if_file_exists: bool,
}

/// Checks that the project directory is safe to write to.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if it exists and `overwrite_if_exists` is false
pub fn ensure_output_dir(project_root: &Path, overwrite_if_exists: bool) -> Result<()> {
    if project_root.exists() && !overwrite_if_exists {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: project_root.display().to_string(),
        });
    }
    Ok(())
}

/// A rendered relative path must stay inside the project root and name
/// every segment.
pub fn is_rendered_path_valid(path: &str) -> bool {
    !path.trim().is_empty() && !path.starts_with('/') && !path.contains("//")
}

/// Maps a rendered relative path to its destination, stripping the `.j2`
/// suffix. The boolean reports whether the content must be rendered.
pub fn resolve_target_path(rendered_path: &str, target_dir: &Path) -> (PathBuf, bool) {
    match template::rendered_name(rendered_path) {
        Some(stem) => (target_dir.join(stem), true),
        None => (target_dir.join(rendered_path), false),
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Materializes the built-in template into `output_dir` and returns the
/// generated project root.
///
/// # Flow
/// 1. Runs the pre-generation hook (field validation); a rejection aborts
///    before any file-system mutation
/// 2. Resolves the project directory from the rendered root name
/// 3. Renders or copies every template file
/// 4. Runs the post-generation hook (optional-feature pruning)
pub fn expand(
    engine: &dyn TemplateRenderer,
    answers: &serde_json::Value,
    options: &ExpandOptions<'_>,
) -> Result<PathBuf> {
    hooks::run_pre_gen_hook(answers)?;

    let root_name = engine.render(template::ROOT_DIR, answers)?;
    if !is_rendered_path_valid(&root_name) || root_name.contains('/') {
        return Err(Error::TemplateError(format!(
            "invalid project directory name '{root_name}'"
        )));
    }
    let project_root = options.output_dir.join(&root_name);
    ensure_output_dir(&project_root, options.overwrite_if_exists)?;

    for file in template::TEMPLATE_FILES {
        let rendered_path = engine.render(&template::target_path(file.path), answers)?;
        if !is_rendered_path_valid(&rendered_path) {
            return Err(Error::TemplateError(format!(
                "invalid rendered path '{rendered_path}' for template file '{}'",
                file.path
            )));
        }

        let (target, render_content) = resolve_target_path(&rendered_path, &project_root);
        if options.skip_if_file_exists && target.exists() {
            debug!("Skipping existing file: {}", target.display());
            continue;
        }

        if render_content {
            debug!("Writing file: {}", target.display());
            let content = engine.render(file.content, answers)?;
            write_file(&target, &content)?;
        } else {
            debug!("Copying file: {}", target.display());
            write_file(&target, file.content)?;
        }
    }

    hooks::run_post_gen_hook(&project_root, answers)?;

    Ok(project_root)
}
