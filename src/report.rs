//! Combined run report
//!
//! ```text
//! confusions ──> summarize_metrics_file ──┐
//!                                         ├──> Report { metrics, times } ──> JSON
//! epoch/train times ──> summarize_time_files ┘
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::SummaryConfig;
use crate::metrics::{self, EpochMetrics};
use crate::timing::{self, TimingSummary};
use crate::Result;

/// Best-epoch metrics plus timing breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Metrics of the best-F1 epoch
    pub metrics: EpochMetrics,
    /// Timing figures for the run
    pub times: TimingSummary,
}

impl Report {
    /// Serialize as 2-space indented JSON, keys in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds a [`Report`] from the documents named in a [`SummaryConfig`].
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: SummaryConfig,
}

impl ReportBuilder {
    /// Create a builder for the given configuration
    #[must_use]
    pub const fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize metrics and timings independently and combine them.
    ///
    /// # Errors
    ///
    /// Propagates any fatal error from either summarizer.
    pub fn build(&self) -> Result<Report> {
        let metrics = metrics::summarize_metrics_file(
            self.config.confusions_path(),
            self.config.zero_division(),
        )?;
        let times = timing::summarize_time_files(
            self.config.epoch_times_path(),
            self.config.train_times_path(),
        )?;
        Ok(Report { metrics, times })
    }

    /// Build the report and serialize it.
    ///
    /// # Errors
    ///
    /// Propagates any fatal error from either summarizer or the encoder.
    pub fn render(&self) -> Result<String> {
        self.build()?.to_json()
    }
}

/// Summarize the three documents and return the report JSON.
///
/// Zero denominators are fatal here; use [`ReportBuilder`] with
/// [`crate::config::ZeroDivisionPolicy::Undefined`] to relax that.
///
/// # Errors
///
/// Propagates any fatal error from either summarizer or the encoder.
pub fn generate_report(
    confusions: impl AsRef<Path>,
    epoch_times: impl AsRef<Path>,
    train_times: impl AsRef<Path>,
) -> Result<String> {
    let config = SummaryConfig::new(
        confusions.as_ref(),
        epoch_times.as_ref(),
        train_times.as_ref(),
    );
    ReportBuilder::new(config).render()
}
