use std::path::PathBuf;

/// Failure to turn raw input into a JSON value tree.
///
/// When decoding fails the validator is never run, so a `DecodeError`
/// always stands alone, never alongside findings.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input is not well-formed JSON text.
    #[error("invalid JSON file: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The input could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DecodeError {
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DecodeError::Io {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Returns true for malformed JSON, as opposed to unreadable input.
    pub fn is_syntax(&self) -> bool {
        matches!(self, DecodeError::Syntax(_))
    }
}
