//! Universe of discourse bounds

use crate::error::{FtsError, Result};
use serde::{Deserialize, Serialize};

/// Bounded numeric range over which fuzzy sets are defined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawUniverse")]
pub struct Universe {
    pub min: f64,
    pub max: f64,
}

#[derive(Deserialize)]
struct RawUniverse {
    min: f64,
    max: f64,
}

impl TryFrom<RawUniverse> for Universe {
    type Error = FtsError;

    fn try_from(raw: RawUniverse) -> Result<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl Universe {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FtsError::InvalidData("universe bounds must be finite".to_string()));
        }
        if min > max {
            return Err(FtsError::InvalidData(format!(
                "universe minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Compute the universe from the data extremes, expanded by margins
    ///
    /// NaN values are ignored. Each extreme moves away from zero by its
    /// margin: a negative minimum is multiplied by `1 + lower_margin`, a
    /// non-negative one by `1 - lower_margin`, and symmetrically for the
    /// maximum.
    pub fn from_data(data: &[f64], lower_margin: f64, upper_margin: f64) -> Result<Self> {
        let mut values = data.iter().copied().filter(|v| !v.is_nan()).peekable();
        if values.peek().is_none() {
            return Err(FtsError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() || !hi.is_finite() {
            return Err(FtsError::InvalidData("data contains infinite values".to_string()));
        }

        let min = if lo < 0.0 {
            lo * (1.0 + lower_margin)
        } else {
            lo * (1.0 - lower_margin)
        };
        let max = if hi > 0.0 {
            hi * (1.0 + upper_margin)
        } else {
            hi * (1.0 - upper_margin)
        };

        Self::new(min, max)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `x` lies within `[min, max]`
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Smallest universe covering both `self` and `[lower, upper]`
    pub fn covering(&self, lower: f64, upper: f64) -> Self {
        Self {
            min: self.min.min(lower),
            max: self.max.max(upper),
        }
    }
}
