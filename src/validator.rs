//! The document walk.
//!
//! [`RichtextValidator`] visits every object member and array element of a
//! decoded document and applies the stringified-JSON check to each matched
//! key. All offending keys are reported; the walk never stops early.

use serde_json::Value;
use stillwater::Validation;
use tracing::{debug, trace};

use crate::error::{Finding, Findings};
use crate::matcher::KeyMatcher;
use crate::path::JsonPath;
use crate::predicate::classify;
use crate::ValidationResult;

/// Walks a JSON value tree and reports matched keys without stringified JSON.
///
/// Findings come out in document order: for each object member, the
/// member's own finding (if any) is followed by the findings inside its
/// value, then the next member's. Array elements are visited by index.
///
/// The walk uses an explicit stack, so arbitrarily deep documents do not
/// exhaust the call stack. Set [`with_max_depth`](Self::with_max_depth) to
/// stop descending past a given nesting level.
///
/// # Example
///
/// ```rust
/// use richtext_lint::RichtextValidator;
/// use serde_json::json;
///
/// let validator = RichtextValidator::new();
/// let findings = validator.validate(&json!({
///     "richtext": {"nested_richtext": "oops"}
/// }));
///
/// let paths: Vec<String> = findings.iter().map(|f| f.path.to_string()).collect();
/// assert_eq!(paths, vec!["richtext", "richtext.nested_richtext"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RichtextValidator {
    matcher: KeyMatcher,
    max_depth: Option<usize>,
}

struct Visit<'a> {
    value: &'a Value,
    path: JsonPath,
    matched: bool,
}

impl RichtextValidator {
    /// Creates a validator for `richtext` keys with no depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rule that decides which keys are checked.
    pub fn with_matcher(mut self, matcher: KeyMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Stops descending into containers nested deeper than `depth`.
    ///
    /// A container past the limit is reported once with code
    /// `max_depth_exceeded` and its contents are skipped. The root is at
    /// depth 0, so `with_max_depth(0)` still checks the root's own keys.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn matcher(&self) -> &KeyMatcher {
        &self.matcher
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns every finding in `root`, in document order.
    ///
    /// An empty result means the document is valid.
    pub fn validate(&self, root: &Value) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut stack = vec![Visit {
            value: root,
            path: JsonPath::root(),
            matched: false,
        }];

        while let Some(Visit {
            value,
            path,
            matched,
        }) = stack.pop()
        {
            if matched {
                if let Err(reason) = classify(value) {
                    debug!(path = %path, %reason, "invalid stringified value");
                    findings.push(Finding::invalid_stringified(path.clone(), value, reason));
                }
            }

            if !is_container(value) {
                continue;
            }

            if let Some(limit) = self.max_depth {
                if path.depth() > limit {
                    debug!(path = %path, limit, "nesting limit reached");
                    findings.push(Finding::depth_exceeded(path, value, limit));
                    continue;
                }
            }

            // Children go on in reverse so they pop in document order.
            match value {
                Value::Object(map) => {
                    for (key, child) in map.iter().rev() {
                        let matched = self.matcher.matches(key);
                        if matched || is_container(child) {
                            stack.push(Visit {
                                value: child,
                                path: path.push_field(key.as_str()),
                                matched,
                            });
                        }
                    }
                }
                Value::Array(items) => {
                    for (index, child) in items.iter().enumerate().rev() {
                        if is_container(child) {
                            stack.push(Visit {
                                value: child,
                                path: path.push_index(index),
                                matched: false,
                            });
                        }
                    }
                }
                _ => {}
            }
            trace!(path = %path, pending = stack.len(), "expanded container");
        }

        debug!(findings = findings.len(), "validation complete");
        findings
    }

    /// Like [`validate`](Self::validate), as a [`Validation`].
    ///
    /// ```rust
    /// use richtext_lint::RichtextValidator;
    /// use serde_json::json;
    ///
    /// let validator = RichtextValidator::new();
    /// assert!(validator.check(&json!({"title": "Hello"})).is_success());
    /// assert!(validator.check(&json!({"richtext": 1})).is_failure());
    /// ```
    pub fn check(&self, root: &Value) -> ValidationResult<()> {
        match Findings::from_vec(self.validate(root)) {
            None => Validation::Success(()),
            Some(findings) => Validation::Failure(findings),
        }
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Validates `root` with the default `richtext` rule and no depth limit.
pub fn validate(root: &Value) -> Vec<Finding> {
    RichtextValidator::new().validate(root)
}
