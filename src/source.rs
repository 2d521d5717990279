//! JSON document loading
//!
//! Each document is opened, decoded in one pass, and closed before the
//! loader returns. IO failures on required documents are fatal; on
//! optional documents they surface as [`Error::MissingOptionalInput`] so
//! the caller can fall back.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a required JSON document
///
/// # Errors
/// - [`Error::MissingInput`] if the file cannot be opened
/// - [`Error::MalformedInput`] if it is not valid JSON for `T`
pub fn load_required<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| Error::MissingInput {
        path: path.to_path_buf(),
        source,
    })?;
    decode(path, file)
}

/// Load an optional JSON document
///
/// # Errors
/// - [`Error::MissingOptionalInput`] if the file cannot be opened or read
/// - [`Error::MalformedInput`] if it exists but is not valid JSON for `T`
pub fn load_optional<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|source| Error::MissingOptionalInput {
        path: path.to_path_buf(),
        source,
    })?;

    decode(path, file).map_err(|e| match e {
        // A read that fails mid-stream is still "unreadable", not malformed
        Error::MissingInput { path, source } => Error::MissingOptionalInput { path, source },
        other => other,
    })
}

fn decode<T: DeserializeOwned>(path: &Path, file: File) -> Result<T> {
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            Error::MissingInput {
                path: path.to_path_buf(),
                source: std::io::Error::from(e),
            }
        } else {
            Error::malformed(path.display().to_string(), e.to_string())
        }
    })
}
