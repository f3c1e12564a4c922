//! Finding and error types.
//!
//! Lint failures are data: a [`Finding`] per offending key, gathered into
//! [`Findings`]. Only failures to obtain a document at all are errors, and
//! those are represented by [`DecodeError`].

mod decode;
mod finding;

pub use decode::DecodeError;
pub use finding::{Finding, FindingReason, Findings};
