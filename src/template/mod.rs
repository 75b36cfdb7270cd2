//! Template processing for stencil
//!
//! This module contains the core template processing components:
//! - `registry`: Reads template files and registers them under their base names
//! - `driver`: Renders registered templates in order and dispatches their output

pub mod driver;
pub mod registry;

pub use driver::{OutputTarget, TemplateDriver};
pub use registry::{register_templates, TemplateEntry};
