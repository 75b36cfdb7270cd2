use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a whole template or values file into a string.
///
/// `action` names what the file was read for and prefixes the error message.
pub fn read_file<P: AsRef<Path>>(path: P, action: &'static str) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::IoError {
        action,
        path: path.display().to_string(),
        source,
    })
}

/// Replaces the content of `dest_path` with `content`.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::write(dest_path, content).map_err(|source| Error::IoError {
        action: "writing output file",
        path: dest_path.display().to_string(),
        source,
    })
}

/// Appends `content` to `dest_path`, creating the file when it is missing.
pub fn append_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let to_io_error = |source: std::io::Error| Error::IoError {
        action: "appending to output file",
        path: dest_path.display().to_string(),
        source,
    };
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dest_path)
        .map_err(to_io_error)?;
    file.write_all(content.as_bytes()).map_err(to_io_error)
}
