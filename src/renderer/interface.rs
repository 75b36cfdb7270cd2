use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Adds a template to the renderer's template collection.
    ///
    /// Adding a template under an existing name replaces the earlier one.
    ///
    /// # Arguments
    /// * `name` - Name to identify the template
    /// * `template` - Template content as string
    ///
    /// # Returns
    /// * `Result<(), minijinja::Error>` - Success or the syntax error found while parsing
    fn add_template(
        &mut self,
        name: &str,
        template: String,
    ) -> Result<(), minijinja::Error>;

    /// Whether a template with this name has been added.
    fn has_template(&self, name: &str) -> bool;

    /// Renders a previously added template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name the template was added under
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render_template(&self, name: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a template string that is not part of the collection.
    ///
    /// The string still sees every added template through `include`.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}
