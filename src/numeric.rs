//! Timestamp and duration values that keep integer inputs integral
//!
//! Upstream producers write timestamps either as whole seconds or as
//! fractional seconds. Differences of two whole-second timestamps stay
//! whole (`10`, not `10.0`) so reports match golden files byte for byte.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

/// A timestamp or a duration in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seconds {
    /// Whole seconds
    Int(i64),
    /// Fractional seconds
    Float(f64),
}

impl Seconds {
    /// Value as `f64`
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl Sub for Seconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map_or_else(|| Self::Float(self.as_f64() - rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() - rhs.as_f64()),
        }
    }
}

impl From<i64> for Seconds {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Seconds {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Seconds {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
