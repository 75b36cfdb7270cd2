use crate::error::{Error, Result};
use crate::ioutils::{append_file, write_file};
use crate::params::Parameters;
use crate::renderer::TemplateRenderer;
use crate::template::registry::TemplateEntry;
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;

/// Where rendered templates go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Each render is printed to the diagnostic stream followed by a newline.
    Diagnostic,
    /// Each render overwrites the file, so the last template wins.
    File(PathBuf),
    /// Renders are concatenated into the file, replacing its previous
    /// content once the first template has rendered.
    AppendFile(PathBuf),
}

impl OutputTarget {
    pub fn new(output: Option<PathBuf>, append: bool) -> Self {
        match output {
            Some(path) if append => OutputTarget::AppendFile(path),
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Diagnostic,
        }
    }
}

/// Renders registered templates in order and dispatches their output.
pub struct TemplateDriver<'a> {
    engine: &'a dyn TemplateRenderer,
    output: &'a OutputTarget,
}

impl<'a> TemplateDriver<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, output: &'a OutputTarget) -> Self {
        Self { engine, output }
    }

    /// Renders every non-library entry against `parameters`.
    ///
    /// Stops at the first failing template; output already written for
    /// earlier templates stays in place.
    ///
    /// # Arguments
    /// * `entries` - Registered templates in command-line order
    /// * `parameters` - The parameter tree exposed as `Values`
    /// * `diagnostic` - Stream used for `OutputTarget::Diagnostic`
    ///
    /// # Returns
    /// * `Result<usize>` - Number of templates rendered
    pub fn execute(
        &self,
        entries: &[TemplateEntry],
        parameters: &Parameters,
        diagnostic: &mut dyn Write,
    ) -> Result<usize> {
        let context = parameters.to_json();
        self.prepare(entries)?;

        let mut rendered = 0;
        for entry in entries {
            if entry.is_library() {
                debug!("Skipping library template '{}' ({})", entry.name, entry.path.display());
                continue;
            }
            let content = self.engine.render_template(&entry.name, &context)?;
            self.dispatch(entry, &content, rendered == 0, diagnostic)?;
            rendered += 1;
        }
        Ok(rendered)
    }

    fn prepare(&self, entries: &[TemplateEntry]) -> Result<()> {
        match self.output {
            OutputTarget::File(path) => {
                let renderable = entries.iter().filter(|entry| !entry.is_library()).count();
                if renderable > 1 {
                    warn!(
                        "{renderable} templates write to {}; only the last one is kept (use --append to concatenate)",
                        path.display()
                    );
                }
                Ok(())
            }
            OutputTarget::AppendFile(_) | OutputTarget::Diagnostic => Ok(()),
        }
    }

    /// `first` marks the first successful render of the run; an append
    /// target is replaced rather than extended at that point.
    fn dispatch(
        &self,
        entry: &TemplateEntry,
        content: &str,
        first: bool,
        diagnostic: &mut dyn Write,
    ) -> Result<()> {
        match self.output {
            OutputTarget::File(path) => {
                write_file(content, path)?;
                info!("Wrote '{}' ({}) to {}", entry.name, entry.path.display(), path.display());
                Ok(())
            }
            OutputTarget::AppendFile(path) if first => {
                write_file(content, path)?;
                info!("Wrote '{}' ({}) to {}", entry.name, entry.path.display(), path.display());
                Ok(())
            }
            OutputTarget::AppendFile(path) => {
                append_file(content, path)?;
                info!(
                    "Appended '{}' ({}) to {}",
                    entry.name,
                    entry.path.display(),
                    path.display()
                );
                Ok(())
            }
            OutputTarget::Diagnostic => {
                writeln!(diagnostic, "{content}").map_err(|source| Error::IoError {
                    action: "writing rendered template",
                    path: "<stderr>".to_string(),
                    source,
                })
            }
        }
    }
}
