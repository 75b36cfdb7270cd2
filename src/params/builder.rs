use crate::constants::VALUES_KEY;
use crate::error::{Error, Result};
use crate::ioutils::read_file;
use crate::params::pairs::parse_pairs;
use log::debug;
use serde_json::{Map, Value};
use std::path::Path;

/// Root of the parameter tree handed to every top-level template.
///
/// Templates see it as `{"Values": {...}}`; the `Values` mapping is always present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: Map<String, Value>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values reachable from templates as `Values.<key>`.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// The tree as the JSON context templates are rendered with.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        root.insert(VALUES_KEY.to_string(), Value::Object(self.values.clone()));
        Value::Object(root)
    }
}

/// Builds the parameter tree from `--set` and `--set-from-file` arguments.
///
/// Inline values are stored first as plain strings; values files are applied
/// afterwards in argument order, so a file always wins over an inline value
/// with the same key.
///
/// # Arguments
/// * `inline` - `key=value` strings
/// * `files` - `key=path` strings pointing at YAML or JSON documents
///
/// # Errors
/// Stops at the first malformed pair, unreadable file or invalid document.
pub fn build_parameters<S: AsRef<str>>(inline: &[S], files: &[S]) -> Result<Parameters> {
    let mut parameters = Parameters::new();

    for (key, value) in parse_pairs(inline)? {
        parameters.set(key, Value::String(value));
    }

    for (key, path) in parse_pairs(files)? {
        debug!("Loading values for '{key}' from {path}");
        let value = load_values_file(&path)?;
        parameters.set(key, Value::Object(value));
    }

    Ok(parameters)
}

/// Reads a YAML or JSON values file whose top level must be a mapping.
///
/// An empty or `null` document yields an empty mapping.
pub fn load_values_file<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    let content = read_file(path, "reading values file")?;
    parse_values(&content).map_err(|source| Error::ValuesParseError {
        path: path.display().to_string(),
        source,
    })
}

fn parse_values(content: &str) -> Result<Map<String, Value>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    let values: Option<Map<String, Value>> = serde_yaml::from_str(content)?;
    Ok(values.unwrap_or_default())
}
