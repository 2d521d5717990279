//! Best-epoch classification metrics
//!
//! Reads one confusion matrix per epoch, derives accuracy, precision,
//! recall and F1 for each, and keeps the epoch with the highest F1.
//!
//! ## Usage
//!
//! ```rust
//! use training_summary::config::ZeroDivisionPolicy;
//! use training_summary::metrics::{summarize_metrics, ConfusionRecord};
//!
//! let epochs = [
//!     ConfusionRecord::new(8.0, 1.0, 1.0, 0.0),
//!     ConfusionRecord::new(9.0, 1.0, 0.0, 0.0),
//! ];
//! let best = summarize_metrics(&epochs, ZeroDivisionPolicy::Fail)?;
//! assert_eq!(best.epoch(), 1);
//! # Ok::<(), training_summary::Error>(())
//! ```

mod confusion_record;
mod epoch_metrics;

pub use confusion_record::{ConfusionRecord, Count};
pub use epoch_metrics::EpochMetrics;

use std::path::Path;
use tracing::{debug, info};

use crate::config::ZeroDivisionPolicy;
use crate::{source, Error, Result};

/// Compute per-epoch metrics and return those of the best-F1 epoch.
///
/// Ties go to the lowest index. Epochs with an undefined F1 never win
/// against a defined one; if no epoch has a defined F1, epoch 0 is
/// returned.
///
/// # Errors
///
/// - [`Error::MalformedInput`] if `records` is empty
/// - [`Error::DivisionByZero`] under [`ZeroDivisionPolicy::Fail`]
pub fn summarize_metrics(
    records: &[ConfusionRecord],
    policy: ZeroDivisionPolicy,
) -> Result<EpochMetrics> {
    let per_epoch = records
        .iter()
        .enumerate()
        .map(|(epoch, record)| {
            let metrics = EpochMetrics::from_confusion(record, epoch, policy)?;
            debug!(
                epoch,
                accuracy = ?metrics.accuracy(),
                precision = ?metrics.precision(),
                recall = ?metrics.recall(),
                f1 = ?metrics.f1(),
                "epoch metrics"
            );
            Ok(metrics)
        })
        .collect::<Result<Vec<_>>>()?;

    let best = select_best(per_epoch)
        .ok_or_else(|| Error::malformed("confusion matrices", "expected at least one epoch"))?;
    info!(epoch = best.epoch(), f1 = ?best.f1(), "selected best epoch");
    Ok(best)
}

/// Load a confusion document and summarize it.
///
/// # Errors
///
/// - [`Error::MissingInput`] if the document cannot be read
/// - [`Error::MalformedInput`] if it is not a non-empty array of records
/// - [`Error::DivisionByZero`] under [`ZeroDivisionPolicy::Fail`]
pub fn summarize_metrics_file(path: &Path, policy: ZeroDivisionPolicy) -> Result<EpochMetrics> {
    let records: Vec<ConfusionRecord> = source::load_required(path)?;
    if records.is_empty() {
        return Err(Error::malformed(
            path.display().to_string(),
            "expected at least one confusion matrix, found an empty array",
        ));
    }
    debug!(path = %path.display(), epochs = records.len(), "loaded confusion matrices");
    summarize_metrics(&records, policy)
}

/// Pick the epoch with the strictly greatest F1, first occurrence on ties.
fn select_best(per_epoch: Vec<EpochMetrics>) -> Option<EpochMetrics> {
    let mut iter = per_epoch.into_iter();
    let mut best = iter.next()?;
    for candidate in iter {
        let better = match (candidate.f1(), best.f1()) {
            (Some(c), Some(b)) => c > b,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if better {
            best = candidate;
        }
    }
    Some(best)
}
