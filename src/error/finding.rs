//! Lint findings.
//!
//! This module provides [`Finding`] for a single offending key and
//! [`Findings`] for the non-empty collection a failed check returns.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use stillwater::prelude::*;

use crate::path::JsonPath;

/// Why a value failed the stringified-JSON check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingReason {
    /// The value is not a string at all.
    NotAString { found: &'static str },
    /// The string is not well-formed JSON text.
    Malformed { error: String },
    /// The string decodes, but to a scalar rather than an object or array.
    Scalar { found: &'static str },
    /// The value sits deeper than the configured nesting limit.
    DepthExceeded { limit: usize },
}

impl Display for FindingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingReason::NotAString { found } => write!(f, "expected a string, found {}", found),
            FindingReason::Malformed { error } => write!(f, "string is not valid JSON: {}", error),
            FindingReason::Scalar { found } => {
                write!(f, "string decodes to {}, expected object or array", found)
            }
            FindingReason::DepthExceeded { limit } => {
                write!(f, "nesting deeper than {} levels was not inspected", limit)
            }
        }
    }
}

/// One offending key in a document.
///
/// `value` is a copy of what was found at `path`. `message` is the
/// user-facing line; `code` is stable for programmatic filtering.
///
/// ```rust
/// use richtext_lint::{validate, JsonPath};
/// use serde_json::json;
///
/// let findings = validate(&json!({"richtext": "not json"}));
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].path, JsonPath::root().push_field("richtext"));
/// assert_eq!(findings[0].value, json!("not json"));
/// assert_eq!(
///     findings[0].message,
///     "Invalid JSON stringified value at key: richtext"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub path: JsonPath,
    pub value: Value,
    pub message: String,
    pub code: String,
    pub reason: FindingReason,
}

impl Finding {
    /// Code for a matched key whose value is not stringified JSON.
    pub const INVALID_STRINGIFIED: &'static str = "invalid_stringified_json";
    /// Code for a container left uninspected because of the depth limit.
    pub const MAX_DEPTH_EXCEEDED: &'static str = "max_depth_exceeded";

    /// A matched key whose value failed the stringified-JSON check.
    pub fn invalid_stringified(path: JsonPath, value: &Value, reason: FindingReason) -> Self {
        let message = format!("Invalid JSON stringified value at key: {}", path);
        Self {
            path,
            value: value.clone(),
            message,
            code: Self::INVALID_STRINGIFIED.to_string(),
            reason,
        }
    }

    /// A container that was not descended into because it is nested deeper than `limit`.
    pub fn depth_exceeded(path: JsonPath, value: &Value, limit: usize) -> Self {
        let message = format!("Maximum nesting depth of {} exceeded at key: {}", limit, path);
        Self {
            path,
            value: value.clone(),
            message,
            code: Self::MAX_DEPTH_EXCEEDED.to_string(),
            reason: FindingReason::DepthExceeded { limit },
        }
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A non-empty, ordered collection of findings.
///
/// Order is traversal order. Combining two collections with
/// [`Semigroup::combine`] appends the second after the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Findings(NonEmptyVec<Finding>);

impl Findings {
    pub fn single(finding: Finding) -> Self {
        Self(NonEmptyVec::singleton(finding))
    }

    /// Wraps `findings`, or returns `None` if there are none.
    pub fn from_vec(findings: Vec<Finding>) -> Option<Self> {
        NonEmptyVec::from_vec(findings).map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.0.iter()
    }

    /// The first finding in traversal order.
    pub fn first(&self) -> &Finding {
        self.0.head()
    }

    /// All findings reported at `path`.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&Finding> {
        self.0.iter().filter(|f| &f.path == path).collect()
    }

    /// All findings with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&Finding> {
        self.0.iter().filter(|f| f.code == code).collect()
    }

    /// Number of findings per code, in order of first appearance.
    pub fn count_by_code(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for finding in self.0.iter() {
            *counts.entry(finding.code.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_vec(self) -> Vec<Finding> {
        self.0.into_vec()
    }
}

impl Semigroup for Findings {
    fn combine(self, other: Self) -> Self {
        Findings(self.0.combine(other.0))
    }
}

impl Display for Findings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} finding(s):", self.len())?;
        for (i, finding) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, finding)?;
        }
        Ok(())
    }
}

impl std::error::Error for Findings {}

impl IntoIterator for Findings {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl Serialize for Findings {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

// Findings cross rayon worker threads in batch linting.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Findings>();
    assert_sync::<Findings>();
};
