//! Error types for training-summary
//!
//! Every variant carries enough context (which document, which epoch,
//! which metric) to fix the input without reading the code.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// training-summary error types
#[derive(Error, Debug)]
pub enum Error {
    /// Structural or schema violation in an input document
    #[error("Malformed input in {source_name}: {message}")]
    MalformedInput {
        /// Document the violation was found in (usually a path)
        source_name: String,
        /// What was wrong with it
        message: String,
    },

    /// A required input document could not be opened or read
    #[error("Required input not readable: {}\n  → Check the path or pass it explicitly on the command line\n  Cause: {source}", .path.display())]
    MissingInput {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// The optional train-times document could not be opened or read
    ///
    /// Recovered inside the timing loader; callers never see it from
    /// [`crate::timing::summarize_time_files`].
    #[error("Optional input not readable: {}\n  Cause: {source}", .path.display())]
    MissingOptionalInput {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A metric's denominator was zero, or the counts overflowed to a non-finite value
    #[error("Division by zero computing {metric} for epoch {epoch} (zero or non-finite denominator)\n  → Rerun with --allow-undefined to report it as null")]
    DivisionByZero {
        /// Metric being computed (`accuracy`, `precision`, `recall`, `f1`)
        metric: &'static str,
        /// 0-based epoch index
        epoch: usize,
    },

    /// Report encoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::MalformedInput`] for the named document
    #[must_use]
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_names_document() {
        let err = Error::malformed("confusions.json", "array is empty");
        let msg = err.to_string();
        assert!(msg.contains("confusions.json"));
        assert!(msg.contains("array is empty"));
    }

    #[test]
    fn test_division_by_zero_names_metric_and_epoch() {
        let err = Error::DivisionByZero {
            metric: "precision",
            epoch: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("precision"));
        assert!(msg.contains("epoch 3"));
    }
}
