//! Template engine for the generated module.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars.
///
/// Output is JavaScript, not HTML, so values are inserted without escaping.
/// Anything that must become a string literal goes through the `js_string`
/// or `js_quote` helpers instead.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Whether a template with this name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        log::trace!("rendering template {name}");
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::Template)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::Template)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // Double-quoted string literal
        handlebars.register_helper(
            "js_string",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&double_quoted(param))?;
                    Ok(())
                },
            ),
        );

        // Single-quoted string literal
        handlebars.register_helper(
            "js_quote",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&single_quoted(param))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `s` as a double-quoted JavaScript string literal.
pub(crate) fn double_quoted(s: &str) -> String {
    // JSON string syntax is a subset of JavaScript's.
    serde_json::Value::from(s).to_string()
}

/// Render `s` as a single-quoted JavaScript string literal.
pub(crate) fn single_quoted(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("hello", "Hello, {{name}}!")
            .unwrap();

        let result = engine.render("hello", &json!({"name": "World"})).unwrap();
        assert_eq!(result, "Hello, World!");
        assert!(engine.has_template("hello"));
        assert!(!engine.has_template("missing"));
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{block}}", &json!({"block": "{a:'<b>&'}"}))
            .unwrap();
        assert_eq!(result, "{a:'<b>&'}");
    }

    #[test]
    fn test_js_string_helper() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("require({{js_string name}})", &json!({"name": "react-native"}))
            .unwrap();
        assert_eq!(result, "require(\"react-native\")");
    }

    #[test]
    fn test_js_quote_helper() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("{{js_quote name}}", &json!({"name": "ios"}))
            .unwrap();
        assert_eq!(result, "'ios'");
    }

    #[test]
    fn test_single_quoted_escapes() {
        assert_eq!(single_quoted("it's"), r"'it\'s'");
        assert_eq!(single_quoted(r"a\b"), r"'a\\b'");
        assert_eq!(single_quoted("a\nb"), r"'a\nb'");
        assert_eq!(single_quoted("\u{7}"), r"'\u0007'");
    }

    #[test]
    fn test_invalid_template() {
        let mut engine = TemplateEngine::new();
        let err = engine.register_template("broken", "{{#if x}}{{/each}}").unwrap_err();
        assert!(matches!(err, CodegenError::InvalidTemplate(_)));
    }
}
