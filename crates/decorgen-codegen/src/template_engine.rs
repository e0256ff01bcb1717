//! Template engine for source synthesis using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in decorator and
//! marker attribute templates pre-registered. Output is plain source text,
//! so HTML escaping is disabled, and strict mode turns a missing context
//! field into an error instead of silently emitting nothing.
//!
//! # Examples
//!
//! ```
//! use decorgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"namespace": "Decorgen", "name": "GenericDecoratorAttribute"});
//! let source = engine.render(TemplateEngine::MARKER_TEMPLATE, &context).unwrap();
//! assert!(source.contains("internal sealed class GenericDecoratorAttribute"));
//! ```

use decorgen_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine for source synthesis.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, so one engine can render for many
/// candidates in parallel.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the per-decorator template.
    pub const DECORATOR_TEMPLATE: &'static str = "decorator";

    /// Name of the marker attribute template.
    pub const MARKER_TEMPLATE: &'static str = "marker_attribute";

    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_codegen::template_engine::TemplateEngine;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// assert!(engine.has_template(TemplateEngine::DECORATOR_TEMPLATE));
    /// ```
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        let mut engine = Self { handlebars };
        engine.register_template_string(
            Self::DECORATOR_TEMPLATE,
            include_str!("../templates/decorator.cs.hbs"),
        )?;
        engine.register_template_string(
            Self::MARKER_TEMPLATE,
            include_str!("../templates/marker_attribute.cs.hbs"),
        )?;

        Ok(engine)
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A field the template uses is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a template, replacing any template with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("banner", "// {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("Failed to register template: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.has_template(TemplateEngine::DECORATOR_TEMPLATE));
        assert!(engine.has_template(TemplateEngine::MARKER_TEMPLATE));
    }

    #[test]
    fn test_render_marker_template() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine
            .render(
                TemplateEngine::MARKER_TEMPLATE,
                &json!({"namespace": "Acme.Codegen", "name": "DecorateAttribute"}),
            )
            .unwrap();
        assert!(rendered.starts_with("// <auto-generated/>\nnamespace Acme.Codegen\n"));
        assert!(rendered.contains("internal sealed class DecorateAttribute : global::System.Attribute"));
    }

    #[test]
    fn test_output_is_not_html_escaped() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("generic", "{{ty}} value;")
            .unwrap();
        let rendered = engine
            .render("generic", &json!({"ty": "global::System.Func<int>"}))
            .unwrap();
        assert_eq!(rendered, "global::System.Func<int> value;");
    }

    #[test]
    fn test_render_nonexistent_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("nonexistent", &json!({})).unwrap_err();
        assert!(err.is_template_error());
        assert!(err.to_string().contains("nonexistent"));
    }

    #[test]
    fn test_strict_mode_fails_on_missing_variable() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render(TemplateEngine::MARKER_TEMPLATE, &json!({"namespace": "Decorgen"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_register_invalid_template_syntax() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("invalid", "Hello {{name");
        assert!(matches!(result.unwrap_err(), Error::TemplateError { .. }));
    }

    #[test]
    fn test_custom_template_override() {
        let mut engine = TemplateEngine::new().unwrap();
        engine.register_template_string("override", "Version 1").unwrap();
        engine.register_template_string("override", "Version 2").unwrap();
        assert_eq!(engine.render("override", &json!({})).unwrap(), "Version 2");
    }

    #[test]
    fn test_concurrent_template_usage() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateEngine>();
    }
}
