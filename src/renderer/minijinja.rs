use super::filters::*;
use super::include::{register_include, IncludeGuard};
use crate::{
    constants::INCLUDE_RECURSION_LIMIT,
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{
    escape_formatter, value::ValueKind, AutoEscape, Environment, Output, State,
    UndefinedBehavior, Value,
};
use std::fmt::Write;

/// MiniJinja-based template rendering engine.
///
/// All templates share one environment: the builtin library, the custom
/// filters and the recursion-guarded `include` function.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Nesting counters shared with the `include` function
    include_guard: IncludeGuard,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the default include ceiling.
    pub fn new() -> Self {
        Self::with_include_ceiling(INCLUDE_RECURSION_LIMIT)
    }

    /// Creates a renderer whose `include` allows at most `ceiling` nested
    /// levels per template.
    pub fn with_include_ceiling(ceiling: usize) -> Self {
        let mut env = Environment::new();
        // Referencing a missing key is an error, never an empty string.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_formatter(format_value);

        // Add all the custom filters
        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("table_case", to_table_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("plural", to_plural);
        env.add_filter("singular", to_singular);
        env.add_filter("foreign_key", to_foreign_key);
        env.add_filter("regex", regex_filter);
        env.add_filter("to_yaml", to_yaml);
        env.add_filter("quote", quote);
        env.add_filter("nindent", nindent);

        let include_guard = IncludeGuard::new(ceiling);
        register_include(&mut env, include_guard.clone());

        Self { env, include_guard }
    }

    /// Counters used by `include`, exposed for inspection.
    pub fn include_guard(&self) -> &IncludeGuard {
        &self.include_guard
    }
}

/// Prints booleans as `true`/`false` and everything else the default way.
fn format_value(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    if value.kind() == ValueKind::Bool {
        out.write_str(&value_to_text(value))?;
        Ok(())
    } else {
        escape_formatter(out, state, value)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(
        &mut self,
        name: &str,
        template: String,
    ) -> Result<(), minijinja::Error> {
        self.env.add_template_owned(name.to_string(), template)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn render_template(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(context))
            .map_err(|err| Error::render(name, err))
    }

    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(|err| Error::render("<string>", err))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::renderer::{interface::TemplateRenderer, MiniJinjaRenderer};
    use serde_json::json;

    fn test_template(template: &str, expected: &str) {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render(template, &json!({})).unwrap();
        assert_eq!(result, expected);
    }

    fn renderer_with(templates: &[(&str, &str)]) -> MiniJinjaRenderer {
        let mut renderer = MiniJinjaRenderer::new();
        for (name, source) in templates {
            renderer.add_template(name, source.to_string()).unwrap();
        }
        renderer
    }

    #[test]
    fn test_string_conversion_filters() {
        test_template("{{ 'hello world' | camel_case }}", "helloWorld");
        test_template("{{ 'hello world' | kebab_case }}", "hello-world");
        test_template("{{ 'hello world' | pascal_case }}", "HelloWorld");
        test_template("{{ 'hello world' | screaming_snake_case }}", "HELLO_WORLD");
        test_template("{{ 'hello world' | snake_case }}", "hello_world");
        test_template("{{ 'Hello World' | table_case }}", "hello_worlds");
        test_template("{{ 'hello world' | train_case }}", "Hello-World");
        test_template("{{ 'car' | plural }}", "cars");
        test_template("{{ 'cars' | singular }}", "car");
        test_template("{{ 'User' | foreign_key }}", "user_id");
    }

    #[test]
    fn test_regex_filter() {
        test_template("{{ 'hello world' | regex('^hello') }}", "true");
        test_template("{{ 'goodbye world' | regex('^hello.*') }}", "false");
        test_template("{{ 'Hello World' | regex('(?i)hello') }}", "true");
        test_template("{{ 'hello' | regex('[') }}", "false");
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let renderer = renderer_with(&[("flags.tmpl", "{{ Values.on }}/{{ Values.off }}")]);
        let rendered = renderer
            .render_template("flags.tmpl", &json!({ "Values": { "on": true, "off": false } }))
            .unwrap();
        assert_eq!(rendered, "true/false");
        test_template("{{ not false }} {{ 1 > 2 }}", "true false");
    }

    #[test]
    fn test_render_string_can_include_added_templates() {
        let renderer = renderer_with(&[("_name.tmpl", "<{{ name }}>")]);
        let rendered = renderer
            .render("Hi {{ include('_name.tmpl', {'name': 'Ada'}) }}", &json!({}))
            .unwrap();
        assert_eq!(rendered, "Hi <Ada>");
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = renderer_with(&[("page.html", "{{ Values.markup }}")]);
        let rendered = renderer
            .render_template("page.html", &json!({ "Values": { "markup": "<b>&</b>" } }))
            .unwrap();
        assert_eq!(rendered, "<b>&</b>");
    }

    #[test]
    fn test_keeps_trailing_newline() {
        let renderer = renderer_with(&[("a.tmpl", "line\n")]);
        assert_eq!(renderer.render_template("a.tmpl", &json!({})).unwrap(), "line\n");
    }

    #[test]
    fn test_missing_key_is_error() {
        let renderer = renderer_with(&[("a.tmpl", "Hello {{ Values.missing }}")]);
        let result = renderer.render_template("a.tmpl", &json!({ "Values": {} }));
        match result {
            Err(Error::RenderError { name, .. }) => assert_eq!(name, "a.tmpl"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_present_key_renders_verbatim() {
        let renderer = renderer_with(&[("a.tmpl", "Hello {{ Values.name }}")]);
        let rendered = renderer
            .render_template("a.tmpl", &json!({ "Values": { "name": "World" } }))
            .unwrap();
        assert_eq!(rendered, "Hello World");
    }

    #[test]
    fn test_syntax_error_on_add() {
        let mut renderer = MiniJinjaRenderer::new();
        assert!(renderer.add_template("bad.tmpl", "{% if %}".to_string()).is_err());
        assert!(!renderer.has_template("bad.tmpl"));
    }

    #[test]
    fn test_include_renders_with_given_data() {
        let renderer = renderer_with(&[
            ("_greeting.tmpl", "Hi {{ name }}!"),
            ("main.tmpl", "{{ include('_greeting.tmpl', Values) }}"),
        ]);
        let rendered = renderer
            .render_template("main.tmpl", &json!({ "Values": { "name": "Ada" } }))
            .unwrap();
        assert_eq!(rendered, "Hi Ada!");
        assert_eq!(renderer.include_guard().depth("_greeting.tmpl"), 0);
    }

    #[test]
    fn test_include_output_can_be_piped() {
        let renderer = renderer_with(&[
            ("_labels.tmpl", "app: {{ app }}\ntier: web"),
            ("main.tmpl", "labels:{{ include('_labels.tmpl', Values) | nindent(2) }}"),
        ]);
        let rendered = renderer
            .render_template("main.tmpl", &json!({ "Values": { "app": "shop" } }))
            .unwrap();
        assert_eq!(rendered, "labels:\n  app: shop\n  tier: web");
    }

    #[test]
    fn test_include_unknown_template_fails() {
        let renderer = renderer_with(&[("main.tmpl", "{{ include('_nope.tmpl', Values) }}")]);
        let result = renderer.render_template("main.tmpl", &json!({ "Values": {} }));
        assert!(matches!(result, Err(Error::RenderError { .. })));
        assert_eq!(renderer.include_guard().depth("_nope.tmpl"), 0);
    }

    #[test]
    fn test_bounded_recursion_succeeds() {
        let renderer = renderer_with(&[
            (
                "_count.tmpl",
                "{{ n }}{% if n > 0 %},{{ include('_count.tmpl', {'n': n - 1}) }}{% endif %}",
            ),
            ("main.tmpl", "{{ include('_count.tmpl', {'n': 3}) }}"),
        ]);
        let rendered = renderer.render_template("main.tmpl", &json!({})).unwrap();
        assert_eq!(rendered, "3,2,1,0");
        assert_eq!(renderer.include_guard().depth("_count.tmpl"), 0);
    }

    #[test]
    fn test_runaway_recursion_hits_ceiling() {
        let mut renderer = MiniJinjaRenderer::with_include_ceiling(20);
        renderer
            .add_template(
                "_loop.tmpl",
                "{{ include('_loop.tmpl', {'data': data}) }}".to_string(),
            )
            .unwrap();
        renderer
            .add_template("main.tmpl", "{{ include('_loop.tmpl', Values) }}".to_string())
            .unwrap();

        let result = renderer.render_template("main.tmpl", &json!({ "Values": { "data": {} } }));
        match result {
            Err(Error::RecursionError { name }) => assert_eq!(name, "_loop.tmpl"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(renderer.include_guard().depth("_loop.tmpl"), 0);
    }
}
