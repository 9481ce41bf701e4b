//! Template engine for lesson plan rendering using Handlebars.
//!
//! Provides a wrapper around Handlebars with the two built-in LaTeX
//! templates: the per-lesson document and the objectives fragment.
//!
//! HTML escaping is disabled because the output is LaTeX source, and strict
//! mode is enabled so a missing context field fails instead of rendering
//! empty text.
//!
//! # Examples
//!
//! ```
//! use lps_core::TemplateEngine;
//!
//! let engine = TemplateEngine::new().unwrap();
//! assert!(engine.render("lesson/unknown", &()).is_err());
//! ```

use crate::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine for lesson plan rendering.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be shared when documents
/// are rendered from several threads.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the per-lesson document template.
    pub const DOCUMENT: &'static str = "lesson/document";

    /// Name of the objectives fragment template.
    pub const OBJECTIVES: &'static str = "lesson/objectives";

    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if a built-in template fails to parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_lesson_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_lesson_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(Self::DOCUMENT, include_str!("../templates/document.tex.hbs"))
            .map_err(|e| Error::Template {
                message: format!("Failed to register document template: {e}"),
                source: Some(Box::new(e)),
            })?;

        handlebars
            .register_template_string(
                Self::OBJECTIVES,
                include_str!("../templates/objectives.tex.hbs"),
            )
            .map_err(|e| Error::Template {
                message: format!("Failed to register objectives template: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(())
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if the template is not registered, the
    /// context cannot be serialized, or a referenced field is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_core::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// let fragment = engine
    ///     .render(
    ///         TemplateEngine::OBJECTIVES,
    ///         &json!({"objectives_macro": "\\objectivesA", "objectives": []}),
    ///     )
    ///     .unwrap();
    /// assert_eq!(fragment.trim_end(), "\\providecommand{\\objectivesA}{}");
    /// ```
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("Rendering '{template_name}' failed: {e}"),
                source: Some(Box::new(e)),
            })
    }
}
