//! # training-summary: Best-Epoch Metrics and Timing Breakdown
//!
//! Reads the JSON artifacts a training run leaves behind and condenses them
//! into a single report:
//!
//! - **metrics**: accuracy, precision, recall and F1 of the epoch with the
//!   best F1, derived from per-epoch confusion matrices
//! - **times**: per-epoch training and testing durations, total run time,
//!   and data-loading time when the run's own span was recorded
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use training_summary::report::generate_report;
//!
//! let json = generate_report(
//!     "metrics_confusions.json",
//!     "metrics_epochtimes.json",
//!     "metrics_traintimes.json",
//! )?;
//! println!("{json}");
//! # Ok::<(), training_summary::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod numeric;
pub mod report;
pub mod source;
pub mod timing;

pub use config::{SummaryConfig, ZeroDivisionPolicy};
pub use error::{Error, Result};
pub use metrics::{ConfusionRecord, EpochMetrics};
pub use numeric::Seconds;
pub use report::{generate_report, Report, ReportBuilder};
pub use timing::{EpochTimeRecord, TimingSummary, TrainTimeRecord};
