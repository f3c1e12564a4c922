//! The stringified-JSON check applied to matched keys.
//!
//! A value passes only if it is a string whose contents decode to a JSON
//! object or array. Decoding happens once; the decoded content is not
//! inspected further.

use serde::de::IgnoredAny;
use serde_json::Value;

use crate::document::deserialize_unbounded;
use crate::error::FindingReason;

/// Returns true if `value` is a string holding a JSON-encoded object or array.
///
/// ```rust
/// use richtext_lint::is_json_stringified;
/// use serde_json::json;
///
/// assert!(is_json_stringified(&json!(r#"{"type":"doc"}"#)));
/// assert!(is_json_stringified(&json!("[1,2]")));
/// assert!(!is_json_stringified(&json!("42")));
/// assert!(!is_json_stringified(&json!("not json")));
/// assert!(!is_json_stringified(&json!({"type": "doc"})));
/// ```
pub fn is_json_stringified(value: &Value) -> bool {
    classify(value).is_ok()
}

/// Like [`is_json_stringified`], but says why a value fails.
pub fn classify(value: &Value) -> Result<(), FindingReason> {
    let text = match value {
        Value::String(s) => s,
        other => {
            return Err(FindingReason::NotAString {
                found: value_type_name(other),
            })
        }
    };

    // Only text opening with `{` or `[` can decode to a container, so that
    // case is checked for well-formedness without building the tree.
    let opening = text.trim_start_matches([' ', '\t', '\n', '\r']).bytes().next();
    if matches!(opening, Some(b'{' | b'[')) {
        return deserialize_unbounded::<_, IgnoredAny>(serde_json::Deserializer::from_str(text))
            .map(|_| ())
            .map_err(|e| FindingReason::Malformed {
                error: e.to_string(),
            });
    }

    match deserialize_unbounded::<_, Value>(serde_json::Deserializer::from_str(text)) {
        Ok(scalar) => Err(FindingReason::Scalar {
            found: value_type_name(&scalar),
        }),
        Err(e) => Err(FindingReason::Malformed {
            error: e.to_string(),
        }),
    }
}

pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_strings_fail() {
        for (value, found) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(42), "number"),
            (json!([1]), "array"),
            (json!({"a": 1}), "object"),
        ] {
            assert_eq!(classify(&value), Err(FindingReason::NotAString { found }));
        }
    }

    #[test]
    fn test_containers_pass() {
        assert!(is_json_stringified(&json!("{}")));
        assert!(is_json_stringified(&json!("[]")));
        assert!(is_json_stringified(&json!(r#"{"type":"doc","content":[]}"#)));
        assert!(is_json_stringified(&json!("  [1, 2]  ")));
    }

    #[test]
    fn test_scalars_fail() {
        assert_eq!(classify(&json!("42")), Err(FindingReason::Scalar { found: "number" }));
        assert_eq!(classify(&json!("true")), Err(FindingReason::Scalar { found: "boolean" }));
        assert_eq!(classify(&json!("null")), Err(FindingReason::Scalar { found: "null" }));
        assert_eq!(
            classify(&json!(r#""quoted""#)),
            Err(FindingReason::Scalar { found: "string" })
        );
    }

    #[test]
    fn test_malformed_fails() {
        for text in ["", "not json", "{", "{\"a\":}", "[1,2"] {
            assert!(
                matches!(classify(&json!(text)), Err(FindingReason::Malformed { .. })),
                "expected malformed for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_non_finite_numbers_are_malformed() {
        for text in ["[NaN]", "{\"a\": Infinity}", "[-Infinity]"] {
            assert!(
                matches!(classify(&json!(text)), Err(FindingReason::Malformed { .. })),
                "expected malformed for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_trailing_content_is_malformed() {
        assert!(!is_json_stringified(&json!("{} {}")));
    }

    #[test]
    fn test_deeply_nested_container_passes() {
        let text = format!("{}{}", "[".repeat(200), "]".repeat(200));
        assert!(is_json_stringified(&json!(text)));

        let text = format!("{}0{}", "[{\"a\":".repeat(20_000), "}]".repeat(20_000));
        assert!(is_json_stringified(&json!(text)));
    }

    #[test]
    fn test_deeply_nested_unbalanced_is_malformed() {
        let text = format!("{}{}", "[".repeat(200), "]".repeat(199));
        assert!(matches!(classify(&json!(text)), Err(FindingReason::Malformed { .. })));
    }

    #[test]
    fn test_leading_whitespace_before_container() {
        assert!(is_json_stringified(&json!("\r\n\t {\"a\": 1}")));
        assert!(matches!(classify(&json!("\u{a0}{}")), Err(FindingReason::Malformed { .. })));
    }

    #[test]
    fn test_decode_is_single_level() {
        // The inner richtext value would fail on its own, but nested content is not re-inspected.
        assert!(is_json_stringified(&json!(r#"{"richtext": 1}"#)));
    }
}
