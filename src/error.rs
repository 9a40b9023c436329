//! Error handling for droidstamp.
//! Defines the crate-wide error type and result alias.

use std::io;
use thiserror::Error;

/// Custom error types for droidstamp operations.
///
/// This enum represents all possible errors that can occur while resolving
/// parameters, loading templates and writing generated files.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while selecting or resolving templates
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors reported by the template engine
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents failures while serializing the placeholder context
    #[error("Context error: {0}.")]
    ContextError(#[from] serde_json::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents failures of interactive prompts
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Rendered path '{path}' for template '{template}' is not a valid relative path.")]
    InvalidTargetPathError { template: String, path: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
