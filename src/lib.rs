//! # richtext-lint
//!
//! Checks that every key containing `richtext` in a JSON document holds a
//! JSON-encoded string, i.e. a string that itself decodes to an object or
//! array.
//!
//! ## Overview
//!
//! The whole document is always inspected and every offending key is
//! reported, so one pass gives the complete list of what needs fixing.
//! Results integrate with stillwater's `Validation` type through
//! [`RichtextValidator::check`].
//!
//! ## Core Types
//!
//! - [`RichtextValidator`]: walks a decoded document and collects findings
//! - [`Finding`]: one offending key, with its path, value and message
//! - [`Findings`]: a non-empty collection of findings
//! - [`JsonPath`]: locations such as `blocks[0].richtext`
//! - [`DecodeError`]: the input was unreadable or not JSON at all
//!
//! ## Example
//!
//! ```rust
//! use richtext_lint::{validate, JsonPath};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "title": "Hello",
//!     "body": {"richtext": "{\"type\":\"doc\"}"},
//!     "summary_richtext": "plain text"
//! });
//!
//! let findings = validate(&doc);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].path, JsonPath::root().push_field("summary_richtext"));
//! ```

pub mod document;
pub mod error;
pub mod loading;
pub mod matcher;
pub mod path;
pub mod predicate;
pub mod report;
pub mod validator;

pub use document::{parse_document, parse_reader, parse_slice, validate_str, validate_str_with};
pub use error::{DecodeError, Finding, FindingReason, Findings};
pub use loading::{
    lint_dir, lint_file, load_dir, load_document, load_inputs, FileSystem, Outcome, StdFileSystem,
};
pub use matcher::KeyMatcher;
pub use path::{JsonPath, PathSegment};
pub use predicate::{classify, is_json_stringified};
pub use report::{render, Format, Report, Status};
pub use validator::{validate, RichtextValidator};

/// Type alias for validation results using Findings
pub type ValidationResult<T> = stillwater::Validation<T, Findings>;
