use crate::constants::KEY_VALUE_SEPARATOR;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Splits each `key=value` string on the first `=`.
///
/// Keys keep the position of their first occurrence while the value of a
/// repeated key is replaced by the last one seen.
///
/// # Arguments
/// * `pairs` - Raw `key=value` arguments in command-line order
///
/// # Returns
/// * `Result<IndexMap<String, String>>` - Keys mapped to their raw values
///
/// # Errors
/// * `Error::FormatError` - If an entry has no `=` or an empty key or value
pub fn parse_pairs<I, S>(pairs: I) -> Result<IndexMap<String, String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = IndexMap::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let Some((key, value)) = pair.split_once(KEY_VALUE_SEPARATOR) else {
            return Err(Error::FormatError {
                input: pair.to_string(),
                reason: "expected key=value string",
            });
        };
        if key.is_empty() || value.is_empty() {
            return Err(Error::FormatError {
                input: pair.to_string(),
                reason: "key or value cannot be empty",
            });
        }
        result.insert(key.to_string(), value.to_string());
    }
    Ok(result)
}
