use log::warn;
use minijinja::{value::ValueKind, ErrorKind, Value};
use regex::Regex;

// Re-export all the case conversion and string manipulation functions
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        table::to_table_case, train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
    suffix::foreign_key::to_foreign_key,
};

/// Custom regex filter for template processing.
///
/// Tests if a string matches a given regular expression pattern.
///
/// # Arguments
/// * `val` - The string to test
/// * `re` - The regular expression pattern
///
/// # Returns
/// * `bool` - True if the string matches the pattern, false otherwise
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Serializes a value as a YAML document without the trailing newline.
pub fn to_yaml(value: Value) -> Result<String, minijinja::Error> {
    let yaml = serde_yaml::to_string(&value).map_err(|err| {
        minijinja::Error::new(ErrorKind::InvalidOperation, "cannot serialize to YAML")
            .with_source(err)
    })?;
    Ok(yaml.trim_end_matches('\n').to_string())
}

/// Text form of a value, with booleans spelled `true`/`false`.
pub fn value_to_text(value: &Value) -> String {
    match value.kind() {
        ValueKind::Bool => value.is_true().to_string(),
        _ => value.to_string(),
    }
}

/// Wraps the string form of a value in double quotes, escaping as needed.
pub fn quote(value: Value) -> String {
    format!("{:?}", value_to_text(&value))
}

/// Starts a new line and indents every line of `value` by `width` spaces.
pub fn nindent(value: String, width: usize) -> String {
    let pad = " ".repeat(width);
    format!("\n{pad}{}", value.replace('\n', &format!("\n{pad}")))
}
