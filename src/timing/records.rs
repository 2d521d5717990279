//! Timestamp records written by the training loop

use serde::{Deserialize, Serialize};

use crate::numeric::Seconds;

/// Wall-clock span of a single epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochTimeRecord {
    /// Epoch start timestamp
    pub start: Seconds,
    /// Epoch end timestamp
    pub end: Seconds,
}

impl EpochTimeRecord {
    /// Create a record from two timestamps
    #[must_use]
    pub fn new(start: impl Into<Seconds>, end: impl Into<Seconds>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// `end - start`
    #[must_use]
    pub fn duration(&self) -> Seconds {
        self.end - self.start
    }
}

/// Wall-clock span of the whole run, data loading included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainTimeRecord {
    /// Run start timestamp
    pub start: Seconds,
    /// Run end timestamp
    pub end: Seconds,
}

impl TrainTimeRecord {
    /// Create a record from two timestamps
    #[must_use]
    pub fn new(start: impl Into<Seconds>, end: impl Into<Seconds>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// `end - start`
    #[must_use]
    pub fn duration(&self) -> Seconds {
        self.end - self.start
    }
}
