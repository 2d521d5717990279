//! Confusion Record - one epoch's binary confusion matrix

use serde::{Deserialize, Serialize};

/// A count read from a confusion document.
///
/// Accepts finite JSON numbers and numeric strings (`"12"`); anything
/// else, `"inf"` and `"NaN"` included, is rejected during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCount", into = "f64")]
pub struct Count(f64);

impl Count {
    /// Value as `f64`
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<Count> for f64 {
    fn from(count: Count) -> Self {
        count.0
    }
}

impl From<f64> for Count {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(f64),
    Text(String),
}

impl TryFrom<RawCount> for Count {
    type Error = String;

    fn try_from(raw: RawCount) -> Result<Self, Self::Error> {
        let value = match raw {
            RawCount::Number(v) => v,
            RawCount::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("count is not numeric: {s:?}"))?,
        };
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(format!("count is not finite: {value}"))
        }
    }
}

/// Confusion matrix for a single epoch.
///
/// Keys other than `fn`, `fp`, `tn`, `tp` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfusionRecord {
    #[serde(rename = "fn")]
    false_negatives: Count,
    #[serde(rename = "fp")]
    false_positives: Count,
    #[serde(rename = "tn")]
    true_negatives: Count,
    #[serde(rename = "tp")]
    true_positives: Count,
}

impl ConfusionRecord {
    /// Create a record from raw counts.
    #[must_use]
    pub const fn new(tp: f64, tn: f64, fp: f64, fn_: f64) -> Self {
        Self {
            false_negatives: Count(fn_),
            false_positives: Count(fp),
            true_negatives: Count(tn),
            true_positives: Count(tp),
        }
    }

    /// True positives
    #[must_use]
    pub const fn tp(&self) -> f64 {
        self.true_positives.get()
    }

    /// True negatives
    #[must_use]
    pub const fn tn(&self) -> f64 {
        self.true_negatives.get()
    }

    /// False positives
    #[must_use]
    pub const fn fp(&self) -> f64 {
        self.false_positives.get()
    }

    /// False negatives
    #[must_use]
    pub const fn fn_(&self) -> f64 {
        self.false_negatives.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numbers() {
        let record: ConfusionRecord =
            serde_json::from_str(r#"{"tp": 8, "tn": 1, "fp": 1, "fn": 0}"#).unwrap();
        assert_eq!(record, ConfusionRecord::new(8.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_deserialize_numeric_strings() {
        let record: ConfusionRecord =
            serde_json::from_str(r#"{"tp": "8", "tn": "1.5", "fp": 1, "fn": " 0 "}"#).unwrap();
        assert!((record.tn() - 1.5).abs() < f64::EPSILON);
        assert!((record.fn_()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extra_keys_ignored() {
        let record: ConfusionRecord =
            serde_json::from_str(r#"{"tp": 1, "tn": 2, "fp": 3, "fn": 4, "threshold": 0.5}"#)
                .unwrap();
        assert!((record.fn_() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_key_rejected() {
        let err = serde_json::from_str::<ConfusionRecord>(r#"{"tp": 1, "tn": 2, "fp": 3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `fn`"));
    }

    #[test]
    fn test_non_finite_strings_rejected() {
        for text in ["inf", "-inf", "NaN", "infinity"] {
            let json = format!(r#"{{"tp": "{text}", "tn": 1, "fp": 1, "fn": 0}}"#);
            let err = serde_json::from_str::<ConfusionRecord>(&json).unwrap_err();
            assert!(err.to_string().contains("not finite"), "{text}: {err}");
        }
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = ConfusionRecord::new(8.0, 1.5, 1.0, 0.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"fn":0.0,"fp":1.0,"tn":1.5,"tp":8.0}"#);

        let parsed: ConfusionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(serde_json::from_str::<ConfusionRecord>(
            r#"{"tp": "many", "tn": 2, "fp": 3, "fn": 4}"#
        )
        .is_err());
        assert!(serde_json::from_str::<ConfusionRecord>(
            r#"{"tp": null, "tn": 2, "fp": 3, "fn": 4}"#
        )
        .is_err());
    }
}
