//! Template rendering engine for stencil
//!
//! This module provides template rendering capabilities using MiniJinja.
//!
//! The module is structured as:
//! - `interface`: Core trait definitions for template rendering
//! - `minijinja`: MiniJinja-based implementation of the template renderer
//! - `filters`: Custom filters for template processing
//! - `include`: The recursion-guarded `include` template function

pub mod filters;
pub mod include;
pub mod interface;
pub mod minijinja;

// Re-export the main types and traits for convenience
pub use include::{IncludeGuard, IncludeScope};
pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
