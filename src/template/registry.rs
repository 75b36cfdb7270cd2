use crate::constants::LIBRARY_PREFIX;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::read_file;
use crate::renderer::TemplateRenderer;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// A template file registered in the renderer under its base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub name: String,
    pub path: PathBuf,
}

impl TemplateEntry {
    /// Library templates are only rendered through `include`.
    pub fn is_library(&self) -> bool {
        self.name.starts_with(LIBRARY_PREFIX)
    }
}

/// Reads and parses every template file into `engine`, in the given order.
///
/// Each file is registered under its base name, so `dir/_helpers.tmpl` is
/// reachable as `include('_helpers.tmpl', ...)`.
///
/// # Arguments
/// * `paths` - Template files in command-line order
/// * `engine` - The renderer that will own the parsed templates
///
/// # Returns
/// * `Result<Vec<TemplateEntry>>` - One entry per path, in the same order
///
/// # Errors
/// Stops at the first file that cannot be read or parsed.
pub fn register_templates<P: AsRef<Path>>(
    paths: &[P],
    engine: &mut dyn TemplateRenderer,
) -> Result<Vec<TemplateEntry>> {
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let name = path.base_name()?;
        let content = read_file(path, "reading template file")?;

        if engine.has_template(&name) {
            warn!("Template '{name}' from {} replaces an earlier file", path.display());
        }
        engine
            .add_template(&name, content)
            .map_err(|source| Error::TemplateParseError { name: name.clone(), source })?;
        debug!("Registered template '{name}' from {}", path.display());

        entries.push(TemplateEntry { name, path: path.to_path_buf() });
    }
    Ok(entries)
}
