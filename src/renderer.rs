//! Template rendering functionality.
//! A thin seam over MiniJinja so the processor and answer collection can be
//! exercised against any renderer.

use minijinja::Environment;

use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer. The trailing newline of a template is kept
    /// so generated files end the way their template source does.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a one-off template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if parsing or rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}
