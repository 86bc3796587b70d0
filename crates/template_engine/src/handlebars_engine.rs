//! Handlebars-based document preprocessing.
//!
//! Settings documents may pull values from the environment before they are
//! parsed:
//!
//! ```yaml
//! repos:
//!   acme/widget:
//!     secrets:
//!       docker_password: '{{env "DOCKER_PASSWORD"}}'
//! ```
//!
//! ```rust
//! use template_engine::HandlebarsTemplateEngine;
//!
//! let engine = HandlebarsTemplateEngine::new();
//! let rendered = engine.render("timeout: 60\n")?;
//! assert_eq!(rendered, "timeout: 60\n");
//! # Ok::<(), template_engine::Error>(())
//! ```

use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperDef, Output, RenderContext, RenderError,
    RenderErrorReason, Template,
};
use serde_json::json;
use tracing::debug;

use crate::errors::Error;

#[cfg(test)]
#[path = "handlebars_tests.rs"]
mod handlebars_tests;

// ================================
// Custom Handlebars Helpers
// ================================

/// Helper that writes the value of an environment variable.
///
/// Unset variables (and values that are not valid unicode) render as an
/// empty string.
struct EnvHelper;

impl HelperDef for EnvHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> Result<(), RenderError> {
        let name = h
            .param(0)
            .and_then(|v| v.value().as_str())
            .ok_or(RenderErrorReason::ParamNotFoundForIndex("env", 0))?;

        match std::env::var(name) {
            Ok(value) => out.write(&value)?,
            Err(_) => debug!(variable = name, "Environment variable not set"),
        }

        Ok(())
    }
}

/// Document preprocessor backed by Handlebars.
///
/// Output is never HTML-escaped and references to anything other than the
/// registered helpers fail the render.
pub struct HandlebarsTemplateEngine {
    handlebars: Handlebars<'static>,
}

impl HandlebarsTemplateEngine {
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(no_escape);
        handlebars.register_helper("env", Box::new(EnvHelper));

        Self { handlebars }
    }

    /// Renders `text`, substituting every directive.
    ///
    /// A directive written as `\{{...}}` is copied to the output as
    /// `{{...}}` without being evaluated.
    ///
    /// # Errors
    ///
    /// - `Error::CompilationError`: a directive is malformed
    /// - `Error::RenderError`: a directive could not be evaluated
    pub fn render(&self, text: &str) -> Result<String, Error> {
        Template::compile(text).map_err(|e| Error::CompilationError {
            message: e.to_string(),
        })?;

        self.handlebars
            .render_template(text, &json!({}))
            .map_err(|e| Error::RenderError {
                message: e.to_string(),
            })
    }
}

impl Default for HandlebarsTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
