//! Document preprocessing for drone-sync.
//!
//! Substitutes `{{env "NAME"}}` directives in raw settings text before it is
//! parsed. A missing variable becomes an empty string; any malformed directive
//! fails the whole document.

mod errors;
mod handlebars_engine;

pub use errors::Error;
pub use handlebars_engine::HandlebarsTemplateEngine;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Renders `text` with a default [`HandlebarsTemplateEngine`].
///
/// # Errors
///
/// Returns [`Error`] when a directive is malformed or cannot be evaluated.
pub fn apply_template(text: &str) -> Result<String, Error> {
    HandlebarsTemplateEngine::new().render(text)
}
