//! Integration tests for Finding and Findings.

use richtext_lint::{Finding, FindingReason, Findings, JsonPath, RichtextValidator, ValidationResult};
use serde_json::json;
use stillwater::prelude::*;
use stillwater::Validation;

fn findings_for(doc: serde_json::Value) -> Findings {
    RichtextValidator::new()
        .check(&doc)
        .into_result()
        .unwrap_err()
}

#[test]
fn test_finding_full_context() {
    let findings = findings_for(json!({"body": {"richtext": "true"}}));
    let finding = findings.first();

    assert_eq!(finding.path.to_string(), "body.richtext");
    assert_eq!(finding.value, json!("true"));
    assert_eq!(finding.message, "Invalid JSON stringified value at key: body.richtext");
    assert_eq!(finding.code, "invalid_stringified_json");
    assert_eq!(finding.reason, FindingReason::Scalar { found: "boolean" });
}

#[test]
fn test_findings_never_empty() {
    let findings = findings_for(json!({"richtext": 0}));
    assert!(!findings.is_empty());
    assert_eq!(findings.len(), 1);
}

#[test]
fn test_findings_from_separate_documents_combine() {
    let first = findings_for(json!({"richtext": 1}));
    let second = findings_for(json!({"a": {"richtext": 2}, "b_richtext": 3}));

    let combined = first.combine(second);
    let paths: Vec<String> = combined.iter().map(|f| f.path.to_string()).collect();
    assert_eq!(paths, vec!["richtext", "a.richtext", "b_richtext"]);
}

#[test]
fn test_validation_and_accumulates_findings() {
    let validator = RichtextValidator::new();
    let v1: ValidationResult<()> = validator.check(&json!({"richtext": "x"}));
    let v2: ValidationResult<()> = validator.check(&json!({"other_richtext": "y"}));
    let v3: ValidationResult<()> = validator.check(&json!({"richtext": "{}"}));

    match v1.and(v2).and(v3) {
        Validation::Success(_) => panic!("Expected failure"),
        Validation::Failure(findings) => assert_eq!(findings.len(), 2),
    }
}

#[test]
fn test_query_by_path_and_code() {
    let findings = findings_for(json!({
        "richtext": {"richtext": "no"},
        "list": [{"richtext": null}]
    }));

    let root_key = JsonPath::root().push_field("richtext");
    assert_eq!(findings.at_path(&root_key).len(), 1);
    assert_eq!(findings.with_code(Finding::INVALID_STRINGIFIED).len(), 3);
    assert!(findings.with_code(Finding::MAX_DEPTH_EXCEEDED).is_empty());
}

#[test]
fn test_findings_display() {
    let display = findings_for(json!({"richtext": 1, "x": {"richtext": 2}})).to_string();
    assert!(display.contains("2 finding(s)"));
    assert!(display.contains("1. Invalid JSON stringified value at key: richtext"));
    assert!(display.contains("2. Invalid JSON stringified value at key: x.richtext"));
}

#[test]
fn test_findings_serialize_as_list() {
    let findings = findings_for(json!({"richtext": "oops"}));
    let encoded = serde_json::to_value(&findings).unwrap();

    assert_eq!(encoded.as_array().map(Vec::len), Some(1));
    assert_eq!(encoded[0]["path"], "richtext");
    assert_eq!(encoded[0]["reason"]["kind"], "malformed");
}
