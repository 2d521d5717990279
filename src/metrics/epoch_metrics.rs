//! Epoch Metrics - classification metrics derived from a confusion matrix

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ConfusionRecord;
use crate::config::ZeroDivisionPolicy;
use crate::{Error, Result};

/// Classification metrics for one epoch.
///
/// Serialized field order is `FN, FP, TN, TP, accuracy, precision,
/// recall, f1, epoch`. A metric is `None` (JSON `null`) only under
/// [`ZeroDivisionPolicy::Undefined`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    #[serde(rename = "FN")]
    false_negatives: f64,
    #[serde(rename = "FP")]
    false_positives: f64,
    #[serde(rename = "TN")]
    true_negatives: f64,
    #[serde(rename = "TP")]
    true_positives: f64,
    accuracy: Option<f64>,
    precision: Option<f64>,
    recall: Option<f64>,
    f1: Option<f64>,
    epoch: usize,
}

impl EpochMetrics {
    /// Derive metrics for the confusion matrix at index `epoch`.
    ///
    /// Evaluation order is accuracy, precision, recall, f1; under
    /// [`ZeroDivisionPolicy::Fail`] the first undefined metric wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] under [`ZeroDivisionPolicy::Fail`]
    /// when any denominator is zero or any metric comes out non-finite.
    pub fn from_confusion(
        record: &ConfusionRecord,
        epoch: usize,
        policy: ZeroDivisionPolicy,
    ) -> Result<Self> {
        let (tp, tn, fp, fn_) = (record.tp(), record.tn(), record.fp(), record.fn_());

        let accuracy = ratio("accuracy", epoch, policy, tp + tn, tp + tn + fp + fn_)?;
        let precision = ratio("precision", epoch, policy, tp, tp + fp)?;
        let recall = ratio("recall", epoch, policy, tp, tp + fn_)?;
        let f1 = match (precision, recall) {
            (Some(p), Some(r)) => ratio("f1", epoch, policy, 2.0 * p * r, p + r)?,
            _ => None,
        };

        Ok(Self {
            false_negatives: fn_,
            false_positives: fp,
            true_negatives: tn,
            true_positives: tp,
            accuracy,
            precision,
            recall,
            f1,
            epoch,
        })
    }

    /// 0-based epoch index
    #[must_use]
    pub const fn epoch(&self) -> usize {
        self.epoch
    }

    /// `(TP + TN) / (TP + TN + FP + FN)`
    #[must_use]
    pub const fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// `TP / (TP + FP)`
    #[must_use]
    pub const fn precision(&self) -> Option<f64> {
        self.precision
    }

    /// `TP / (TP + FN)`
    #[must_use]
    pub const fn recall(&self) -> Option<f64> {
        self.recall
    }

    /// Harmonic mean of precision and recall
    #[must_use]
    pub const fn f1(&self) -> Option<f64> {
        self.f1
    }

    /// True positives
    #[must_use]
    pub const fn tp(&self) -> f64 {
        self.true_positives
    }

    /// True negatives
    #[must_use]
    pub const fn tn(&self) -> f64 {
        self.true_negatives
    }

    /// False positives
    #[must_use]
    pub const fn fp(&self) -> f64 {
        self.false_positives
    }

    /// False negatives
    #[must_use]
    pub const fn fn_(&self) -> f64 {
        self.false_negatives
    }
}

fn ratio(
    metric: &'static str,
    epoch: usize,
    policy: ZeroDivisionPolicy,
    numerator: f64,
    denominator: f64,
) -> Result<Option<f64>> {
    // overflowing counts give inf/NaN, which is no more defined than x/0
    if denominator != 0.0 && denominator.is_finite() {
        let value = numerator / denominator;
        if value.is_finite() {
            return Ok(Some(value));
        }
    }
    match policy {
        ZeroDivisionPolicy::Fail => Err(Error::DivisionByZero { metric, epoch }),
        ZeroDivisionPolicy::Undefined => {
            warn!(metric, epoch, "zero or non-finite denominator, metric undefined");
            Ok(None)
        }
    }
}
