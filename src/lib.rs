//! droidstamp stamps out boilerplate for MVVM Android screens.
//! It renders built-in (or overridden) Kotlin and layout templates for an
//! activity, fragment, dialog fragment or view-model into an Android project.

/// Resolution of name, package and application id
pub mod answers;

/// Built-in templates and the sets generated per kind
pub mod catalog;

/// Command-line interface module for the droidstamp application
pub mod cli;

/// Project configuration (droidstamp.json, droidstamp.yml, droidstamp.yaml)
pub mod config;

pub mod constants;

/// Placeholder context passed to the renderer
pub mod context;

/// Error types and handling for the droidstamp application
pub mod error;

/// Template body loading and per-file overrides
pub mod loader;

pub mod logger;

/// Validated feature, package and application id names
pub mod naming;

/// Command-line and configuration precedence
pub mod options;

/// Planning and writing of generated files
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Template rendering
pub mod renderer;
