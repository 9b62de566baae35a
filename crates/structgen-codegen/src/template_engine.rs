//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in `structs`
//! template registered. Output is Go source, so HTML escaping is disabled.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({
//!     "package_name": "p",
//!     "tag_key": "json",
//!     "receiver": "s",
//!     "method_name": "String",
//!     "structs": []
//! });
//! let rendered = engine.render(TemplateEngine::STRUCTS, &context).unwrap();
//! assert!(rendered.starts_with("package p"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use structgen_core::{Error, Result};

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the built-in template rendering struct declarations and
    /// their string methods.
    pub const STRUCTS: &'static str = "structs";

    /// Creates a new template engine with the built-in template registered.
    ///
    /// Parsing the template happens here, once per engine.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with the valid built-in template).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars
            .register_template_string(Self::STRUCTS, include_str!("../templates/structs.go.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register structs template: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable the template uses is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers a custom template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use structgen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("custom", "// {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_context() -> serde_json::Value {
        json!({
            "package_name": "models",
            "tag_key": "json",
            "receiver": "s",
            "method_name": "String",
            "structs": [{
                "name": "User",
                "fields": [
                    {"name": "ID", "type_text": "int", "tag": "i_d"},
                    {"name": "secret", "type_text": "map[string]<-chan int", "tag": ""}
                ]
            }]
        })
    }

    // ========================================================================
    // Built-in Template Tests
    // ========================================================================

    #[test]
    fn test_template_engine_creation() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_render_structs_template() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render(TemplateEngine::STRUCTS, &user_context()).unwrap();

        assert!(rendered.starts_with("package models\n"));
        assert!(rendered.contains("type User struct {"));
        assert!(rendered.contains("\tID int `json:\"i_d\"`\n"));
        assert!(rendered.contains("func (s *User) String() string {"));
        assert!(rendered.contains("return \"ID: s.ID, secret: s.secret\""));
    }

    #[test]
    fn test_no_annotation_for_empty_tag() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render(TemplateEngine::STRUCTS, &user_context()).unwrap();

        assert!(rendered.contains("\tsecret map[string]<-chan int\n"));
        assert!(!rendered.contains("json:\"\""));
    }

    #[test]
    fn test_no_html_escaping() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine.render(TemplateEngine::STRUCTS, &user_context()).unwrap();

        assert!(rendered.contains("<-chan"));
        assert!(!rendered.contains("&lt;"));
        assert!(!rendered.contains("&quot;"));
    }

    #[test]
    fn test_custom_names() {
        let engine = TemplateEngine::new().unwrap();
        let mut context = user_context();
        context["tag_key"] = json!("yaml");
        context["receiver"] = json!("u");
        context["method_name"] = json!("Describe");

        let rendered = engine.render(TemplateEngine::STRUCTS, &context).unwrap();
        assert!(rendered.contains("`yaml:\"i_d\"`"));
        assert!(rendered.contains("func (u *User) Describe() string {"));
        assert!(rendered.contains("ID: u.ID"));
    }

    #[test]
    fn test_zero_field_struct() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "package_name": "p",
            "tag_key": "json",
            "receiver": "s",
            "method_name": "String",
            "structs": [{"name": "Empty", "fields": []}]
        });

        let rendered = engine.render(TemplateEngine::STRUCTS, &context).unwrap();
        assert!(rendered.contains("type Empty struct {\n}"));
        assert!(rendered.contains("return \"\""));
    }

    // ========================================================================
    // Error Handling Tests
    // ========================================================================

    #[test]
    fn test_render_nonexistent_template() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("nonexistent/template", &json!({}));

        assert!(result.unwrap_err().is_template_error());
    }

    #[test]
    fn test_render_with_missing_fields_list() {
        let engine = TemplateEngine::new().unwrap();
        let context = json!({
            "package_name": "p",
            "tag_key": "json",
            "receiver": "s",
            "method_name": "String",
            "structs": [{"name": "Broken"}]
        });

        let result = engine.render(TemplateEngine::STRUCTS, &context);
        assert!(result.is_err(), "strict mode should reject a missing field list");
    }

    #[test]
    fn test_render_with_empty_context() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.render(TemplateEngine::STRUCTS, &json!({})).is_err());
    }

    #[test]
    fn test_register_invalid_template_syntax() {
        let mut engine = TemplateEngine::new().unwrap();

        // Invalid Handlebars syntax: unclosed tag
        let result = engine.register_template_string("invalid", "Hello {{name");

        assert!(matches!(result.unwrap_err(), Error::TemplateError { .. }));
    }

    #[test]
    fn test_custom_template_registration() {
        let mut engine = TemplateEngine::new().unwrap();

        engine
            .register_template_string("test", "Hello {{name}}")
            .unwrap();

        let result = engine.render("test", &json!({"name": "World"})).unwrap();
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_concurrent_template_usage() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateEngine>();
    }
}
