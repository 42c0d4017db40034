use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Largest integer a JSON client can represent exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A submitted game score.
///
/// Scores arrive as arbitrary JSON numbers, so they are held as a finite `f64`.
/// Whole numbers serialize back as JSON integers (`20000`, not `20000.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Score(f64);

impl Score {
    /// Wrap a raw value, rejecting NaN and infinities
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(Self(value))
    }

    /// Read a score out of a JSON value. Only JSON numbers qualify.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        value.as_f64().and_then(Self::new)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Total ordering, usable with `sort_by`
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    fn is_integral(self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() <= MAX_SAFE_INTEGER
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| de::Error::custom("score must be a finite number"))
    }
}
