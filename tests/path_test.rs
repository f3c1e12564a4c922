//! Integration tests for JsonPath.

use richtext_lint::{validate, JsonPath, PathSegment};
use serde_json::json;

#[test]
fn test_path_display_matches_reported_keys() {
    assert_eq!(JsonPath::root().to_string(), "");
    assert_eq!(JsonPath::root().push_field("richtext").to_string(), "richtext");
    assert_eq!(JsonPath::root().push_index(3).to_string(), "[3]");

    let path = JsonPath::root()
        .push_field("page")
        .push_field("blocks")
        .push_index(0)
        .push_field("body_richtext");
    assert_eq!(path.to_string(), "page.blocks[0].body_richtext");
}

#[test]
fn test_finding_paths_use_segments() {
    let findings = validate(&json!({"rows": [[{"richtext": 1}]]}));
    let segments: Vec<&PathSegment> = findings[0].path.segments().collect();

    assert_eq!(
        segments,
        vec![
            &PathSegment::Field("rows".to_string()),
            &PathSegment::Index(0),
            &PathSegment::Index(0),
            &PathSegment::Field("richtext".to_string()),
        ]
    );
}

#[test]
fn test_keys_are_rendered_verbatim() {
    // Keys are not escaped, so dots and brackets inside a key show up as-is.
    let findings = validate(&json!({"a.b": {"x[0]richtext": 1}, "": {"richtext": 2}}));
    let rendered: Vec<String> = findings.iter().map(|f| f.path.to_string()).collect();
    assert_eq!(rendered, vec!["a.b.x[0]richtext", ".richtext"]);
}

#[test]
fn test_paths_are_hashable() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(JsonPath::root().push_field("a"));
    seen.insert(JsonPath::root().push_field("a"));
    seen.insert(JsonPath::root().push_index(0));
    assert_eq!(seen.len(), 2);
}
