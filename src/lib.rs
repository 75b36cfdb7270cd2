/// Handles argument parsing and the top-level workflow.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Builds the `Values` parameter tree.
pub mod params;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Template registration and ordered execution.
pub mod template;
