use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types that can occur while preprocessing a settings document.
///
/// Both variants carry the underlying Handlebars message unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The document contains a malformed directive, such as an unclosed
    /// `{{` or a helper call with broken syntax.
    #[error("Template compilation failed: {message}")]
    CompilationError { message: String },

    /// A well-formed directive could not be evaluated, for example a call to
    /// an unknown helper or `env` without a name.
    #[error("Template rendering failed: {message}")]
    RenderError { message: String },
}
