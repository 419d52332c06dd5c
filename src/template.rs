//! The built-in plugin project template.
//!
//! Every file materialized for a new project is embedded here, keyed by its
//! path relative to the project root. Paths may contain placeholders and are
//! rendered against the answers before writing. A file whose name carries
//! the `.j2` suffix has its content rendered as well and is written without
//! the suffix; everything else is written verbatim.

/// One embedded template file.
#[derive(Debug)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: &'static str,
}

/// Directory name of the generated project, rendered against the answers.
pub const ROOT_DIR: &str = "{{ plugin_id }}";

macro_rules! template_file {
    ($path:literal) => {
        TemplateFile { path: $path, content: include_str!(concat!("../templates/", $path)) }
    };
}

/// The full template tree. Optional-feature files (Vitest, i18n, license)
/// are always materialized and pruned afterwards when disabled.
pub const TEMPLATE_FILES: &[TemplateFile] = &[
    template_file!("manifest.json.j2"),
    template_file!("package.json.j2"),
    template_file!("versions.json.j2"),
    template_file!("tsconfig.json"),
    template_file!("esbuild.config.mjs"),
    template_file!("version-bump.mjs"),
    template_file!("eslint.config.js"),
    template_file!("styles.css"),
    template_file!("Makefile"),
    template_file!("README.md.j2"),
    template_file!("LICENSE.j2"),
    template_file!("gitignore"),
    template_file!("src/main.ts.j2"),
    template_file!("src/i18n/index.ts"),
    template_file!("locales/en.json.j2"),
    template_file!("vitest.config.ts"),
    template_file!("tests/smoke.test.ts"),
    template_file!(".github/workflows/ci.yml.j2"),
    template_file!(".github/workflows/release.yml.j2"),
    template_file!(".github/dependabot.yml"),
];

/// Returns the target file name when `filename` carries the `.j2` render
/// suffix, `None` when the file is written verbatim.
pub fn rendered_name(filename: &str) -> Option<&str> {
    filename.strip_suffix(".j2").filter(|stem| !stem.is_empty())
}

/// Dotfiles are embedded without their leading dot so the template payload
/// itself never looks like tooling configuration; this restores it.
pub fn target_path(path: &str) -> String {
    match path {
        "gitignore" => ".gitignore".to_string(),
        other => other.to_string(),
    }
}
