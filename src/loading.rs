//! Linting documents stored on a filesystem.
//!
//! Filesystem access goes through the [`FileSystem`] trait so tests can
//! substitute an in-memory implementation. Documents are independent, so a
//! directory is linted in parallel; results are still returned in path order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde_json::Value;
use stillwater::Validation;
use tracing::debug;

use crate::document::parse_slice;
use crate::error::{DecodeError, Findings};
use crate::validator::RichtextValidator;

/// Abstraction for filesystem operations.
pub trait FileSystem: Send + Sync {
    /// The error type for filesystem operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the full contents of a file.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, Self::Error>;

    /// Lists all entries in a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error>;

    /// Returns true if `path` names a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    type Error = std::io::Error;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, Self::Error> {
        std::fs::read(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// The result of linting one document.
#[derive(Debug)]
pub enum Outcome {
    /// Every matched key holds stringified JSON.
    Valid,
    /// The document decoded but has findings.
    Invalid(Findings),
    /// The document could not be read or decoded; it was not validated.
    DecodeFailed(DecodeError),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    pub fn findings(&self) -> Option<&Findings> {
        match self {
            Outcome::Invalid(findings) => Some(findings),
            _ => None,
        }
    }

    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Outcome::DecodeFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Validation<(), Findings>> for Outcome {
    fn from(result: Validation<(), Findings>) -> Self {
        match result {
            Validation::Success(()) => Outcome::Valid,
            Validation::Failure(findings) => Outcome::Invalid(findings),
        }
    }
}

/// Reads and decodes a single file without validating it.
pub fn load_document<Fs: FileSystem>(path: &Path, fs: &Fs) -> Result<Value, DecodeError> {
    let bytes = fs.read_file(path).map_err(|e| DecodeError::io(path, e))?;
    parse_slice(&bytes)
}

/// Reads, decodes and validates a single file.
pub fn lint_file<Fs: FileSystem>(
    path: &Path,
    fs: &Fs,
    validator: &RichtextValidator,
) -> Outcome {
    let outcome = match load_document(path, fs) {
        Ok(document) => Outcome::from(validator.check(&document)),
        Err(err) => Outcome::DecodeFailed(err),
    };
    match &outcome {
        Outcome::Valid => debug!(path = %path.display(), "document valid"),
        Outcome::Invalid(findings) => {
            debug!(path = %path.display(), findings = findings.len(), "document has findings")
        }
        Outcome::DecodeFailed(err) => {
            debug!(path = %path.display(), error = %err, "document skipped")
        }
    }
    outcome
}

fn json_files<Fs: FileSystem>(dir: &Path, fs: &Fs) -> Result<Vec<PathBuf>, DecodeError> {
    let mut files: Vec<PathBuf> = fs
        .read_dir(dir)
        .map_err(|e| DecodeError::io(dir, e))?
        .into_iter()
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    debug!(dir = %dir.display(), files = files.len(), "listed directory");
    Ok(files)
}

/// Reads and decodes every `.json` file directly inside `dir`, sorted by path.
///
/// Subdirectories are not entered. An error is returned only if the
/// directory itself cannot be listed.
pub fn load_dir<Fs: FileSystem>(
    dir: &Path,
    fs: &Fs,
) -> Result<Vec<(PathBuf, Result<Value, DecodeError>)>, DecodeError> {
    Ok(json_files(dir, fs)?
        .into_par_iter()
        .map(|path| {
            let loaded = load_document(&path, fs);
            (path, loaded)
        })
        .collect())
}

/// Lints every `.json` file directly inside `dir`.
///
/// Subdirectories are not entered. Results are sorted by path. An error is
/// returned only if the directory itself cannot be listed; per-file
/// problems are reported as [`Outcome::DecodeFailed`].
pub fn lint_dir<Fs: FileSystem>(
    dir: &Path,
    fs: &Fs,
    validator: &RichtextValidator,
) -> Result<Vec<(PathBuf, Outcome)>, DecodeError> {
    Ok(json_files(dir, fs)?
        .into_par_iter()
        .map(|path| {
            let outcome = lint_file(&path, fs, validator);
            (path, outcome)
        })
        .collect())
}

/// Loads each input in order, expanding directories to their `.json` files.
///
/// A directory that cannot be listed yields one failed entry under its own
/// path; the remaining inputs are still loaded.
pub fn load_inputs<Fs: FileSystem>(
    inputs: &[PathBuf],
    fs: &Fs,
) -> Vec<(PathBuf, Result<Value, DecodeError>)> {
    let mut loaded = Vec::new();
    for input in inputs {
        if !fs.is_dir(input) {
            loaded.push((input.clone(), load_document(input, fs)));
            continue;
        }
        match load_dir(input, fs) {
            Ok(entries) => loaded.extend(entries),
            Err(err) => {
                debug!(dir = %input.display(), error = %err, "directory skipped");
                loaded.push((input.clone(), Err(err)));
            }
        }
    }
    loaded
}
