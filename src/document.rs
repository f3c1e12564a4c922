//! Decoding raw input into a document.
//!
//! Key order is preserved as written. Decoding fails fast on the first
//! syntax error, and a document that fails to decode is never validated.
//! Nesting depth is unbounded: the parser grows its stack on the heap
//! instead of stopping at `serde_json`'s default limit of 128 levels.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{DecodeError, Finding};
use crate::validator::RichtextValidator;

pub fn parse_document(text: &str) -> Result<Value, DecodeError> {
    Ok(deserialize_unbounded(serde_json::Deserializer::from_str(text))?)
}

pub fn parse_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    Ok(deserialize_unbounded(serde_json::Deserializer::from_slice(bytes))?)
}

/// Decodes a document from a reader, e.g. an uploaded file or stdin.
pub fn parse_reader(reader: impl Read) -> Result<Value, DecodeError> {
    Ok(deserialize_unbounded(serde_json::Deserializer::from_reader(reader))?)
}

/// Deserializes one complete JSON text with no nesting limit.
///
/// Trailing non-whitespace content is rejected.
pub(crate) fn deserialize_unbounded<'de, R, T>(
    mut de: serde_json::Deserializer<R>,
) -> Result<T, serde_json::Error>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de>,
{
    de.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Decodes `text` and validates it with the default rule.
///
/// ```rust
/// use richtext_lint::validate_str;
///
/// assert!(validate_str(r#"{"title": "Hello"}"#).unwrap().is_empty());
/// assert_eq!(validate_str(r#"{"richtext": "not json"}"#).unwrap().len(), 1);
/// assert!(validate_str("{oops").is_err());
/// ```
pub fn validate_str(text: &str) -> Result<Vec<Finding>, DecodeError> {
    validate_str_with(text, &RichtextValidator::new())
}

pub fn validate_str_with(
    text: &str,
    validator: &RichtextValidator,
) -> Result<Vec<Finding>, DecodeError> {
    let document = parse_document(text)?;
    Ok(validator.validate(&document))
}
