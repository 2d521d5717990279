//! Run configuration: where the three input documents live and how
//! degenerate metrics are handled.

use std::path::{Path, PathBuf};

/// Default confusion-matrix document
pub const DEFAULT_CONFUSIONS_PATH: &str = "metrics_confusions.json";
/// Default per-epoch timestamp document
pub const DEFAULT_EPOCH_TIMES_PATH: &str = "metrics_epochtimes.json";
/// Default whole-run timestamp document
pub const DEFAULT_TRAIN_TIMES_PATH: &str = "metrics_traintimes.json";

/// What to do when a metric's denominator is exactly zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDivisionPolicy {
    /// Abort with [`crate::Error::DivisionByZero`]
    #[default]
    Fail,
    /// Report the metric as undefined (`null` in the output)
    Undefined,
}

/// Input locations and policy for one summary run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    confusions_path: PathBuf,
    epoch_times_path: PathBuf,
    train_times_path: PathBuf,
    zero_division: ZeroDivisionPolicy,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            confusions_path: PathBuf::from(DEFAULT_CONFUSIONS_PATH),
            epoch_times_path: PathBuf::from(DEFAULT_EPOCH_TIMES_PATH),
            train_times_path: PathBuf::from(DEFAULT_TRAIN_TIMES_PATH),
            zero_division: ZeroDivisionPolicy::Fail,
        }
    }
}

impl SummaryConfig {
    /// Config pointing at the three given documents, failing on zero division
    #[must_use]
    pub fn new(
        confusions_path: impl Into<PathBuf>,
        epoch_times_path: impl Into<PathBuf>,
        train_times_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            confusions_path: confusions_path.into(),
            epoch_times_path: epoch_times_path.into(),
            train_times_path: train_times_path.into(),
            zero_division: ZeroDivisionPolicy::Fail,
        }
    }

    /// Create a builder starting from the default paths
    #[must_use]
    pub fn builder() -> SummaryConfigBuilder {
        SummaryConfigBuilder::default()
    }

    /// Confusion-matrix document
    #[must_use]
    pub fn confusions_path(&self) -> &Path {
        &self.confusions_path
    }

    /// Per-epoch timestamp document
    #[must_use]
    pub fn epoch_times_path(&self) -> &Path {
        &self.epoch_times_path
    }

    /// Whole-run timestamp document (optional on disk)
    #[must_use]
    pub fn train_times_path(&self) -> &Path {
        &self.train_times_path
    }

    /// Zero-division policy
    #[must_use]
    pub const fn zero_division(&self) -> ZeroDivisionPolicy {
        self.zero_division
    }
}

/// Builder for `SummaryConfig`.
#[derive(Debug, Default)]
pub struct SummaryConfigBuilder {
    config: SummaryConfig,
}

impl SummaryConfigBuilder {
    /// Set the confusion-matrix document
    #[must_use]
    pub fn confusions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.confusions_path = path.into();
        self
    }

    /// Set the per-epoch timestamp document
    #[must_use]
    pub fn epoch_times_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.epoch_times_path = path.into();
        self
    }

    /// Set the whole-run timestamp document
    #[must_use]
    pub fn train_times_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.train_times_path = path.into();
        self
    }

    /// Set the zero-division policy
    #[must_use]
    pub const fn zero_division(mut self, policy: ZeroDivisionPolicy) -> Self {
        self.config.zero_division = policy;
        self
    }

    /// Build the `SummaryConfig`.
    #[must_use]
    pub fn build(self) -> SummaryConfig {
        self.config
    }
}
