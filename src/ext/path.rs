use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to derive template names
pub trait PathExt {
    /// Returns the final component of the path as a UTF-8 string.
    ///
    /// This is the name under which a template file is registered and the
    /// name other templates pass to `include`.
    ///
    /// # Returns
    /// * `Ok(String)` - The base name of the path
    /// * `Err(Error)` - If the path has no final component or it is not valid Unicode
    ///
    /// # Examples
    /// ```
    /// use stencil::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("templates/_helpers.tmpl");
    /// assert_eq!(path.base_name().unwrap(), "_helpers.tmpl");
    /// ```
    fn base_name(&self) -> Result<String>;
}

impl PathExt for Path {
    fn base_name(&self) -> Result<String> {
        self.file_name().and_then(|name| name.to_str()).map(str::to_owned).ok_or_else(
            || Error::IoError {
                action: "deriving template name",
                path: self.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path has no valid UTF-8 file name",
                ),
            },
        )
    }
}
