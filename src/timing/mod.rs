//! Elapsed-time breakdown of a training run
//!
//! Per-epoch training durations come straight from each epoch's span;
//! testing durations are the gaps between consecutive epochs. The whole
//! run's span, when its record exists, gives the total time and the
//! data-loading lead-in; otherwise the total falls back to first epoch
//! start through last epoch end.
//!
//! ```text
//! train.start   e0.start    e0.end   e1.start    e1.end      train.end
//!     |--load-----|--train----|--test---|--train----|  ...  ----|
//! ```

mod records;

pub use records::{EpochTimeRecord, TrainTimeRecord};

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::numeric::Seconds;
use crate::{source, Error, Result};

/// Aggregate timing figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// `end - start` of every epoch, in order
    pub training_per_epoch_secs: Vec<Seconds>,
    /// Gap between each epoch's end and the next epoch's start
    pub testing_per_epoch_secs: Vec<Seconds>,
    /// Whole-run duration
    pub total_time: Seconds,
    /// Time before the first epoch started; only known with a train-times record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_loading_secs: Option<Seconds>,
}

/// Compute the timing breakdown from in-memory records.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `epochs` is empty.
pub fn summarize_times(
    epochs: &[EpochTimeRecord],
    train: Option<&TrainTimeRecord>,
) -> Result<TimingSummary> {
    let (Some(first), Some(last)) = (epochs.first(), epochs.last()) else {
        return Err(Error::malformed("epoch times", "expected at least one epoch"));
    };

    let training_per_epoch_secs = epochs.iter().map(EpochTimeRecord::duration).collect();
    let testing_per_epoch_secs = epochs
        .windows(2)
        .map(|pair| pair[1].start - pair[0].end)
        .collect();

    let (total_time, data_loading_secs) = match train {
        Some(train) => (train.duration(), Some(first.start - train.start)),
        None => (last.end - first.start, None),
    };

    Ok(TimingSummary {
        training_per_epoch_secs,
        testing_per_epoch_secs,
        total_time,
        data_loading_secs,
    })
}

/// Load the timing documents and summarize them.
///
/// An unreadable train-times document is not an error: it is logged and
/// the fallback total is used.
///
/// # Errors
///
/// - [`Error::MissingInput`] if the epoch-times document cannot be read
/// - [`Error::MalformedInput`] if either document is present but invalid,
///   or the epoch-times array is empty
pub fn summarize_time_files(epoch_times: &Path, train_times: &Path) -> Result<TimingSummary> {
    let epochs: Vec<EpochTimeRecord> = source::load_required(epoch_times)?;
    if epochs.is_empty() {
        return Err(Error::malformed(
            epoch_times.display().to_string(),
            "expected at least one epoch time record, found an empty array",
        ));
    }
    debug!(path = %epoch_times.display(), epochs = epochs.len(), "loaded epoch times");

    let train = match source::load_optional::<TrainTimeRecord>(train_times) {
        Ok(record) => Some(record),
        Err(Error::MissingOptionalInput { path, source }) => {
            warn!(
                path = %path.display(),
                error = %source,
                "train times not available, total time falls back to epoch span"
            );
            None
        }
        Err(other) => return Err(other),
    };

    let summary = summarize_times(&epochs, train.as_ref())?;
    info!(
        epochs = epochs.len(),
        total_time = %summary.total_time,
        from_train_times = train.is_some(),
        "timing summary computed"
    );
    Ok(summary)
}
