//! Min-max scaling transformation

use fts_spi::{FtsError, Result, Transformation};
use serde::{Deserialize, Serialize};

/// Linearly map the fitted data range onto `[target_min, target_max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScale")]
pub struct Scale {
    data_min: f64,
    data_max: f64,
    target_min: f64,
    target_max: f64,
}

#[derive(Deserialize)]
struct RawScale {
    data_min: f64,
    data_max: f64,
    target_min: f64,
    target_max: f64,
}

impl TryFrom<RawScale> for Scale {
    type Error = FtsError;

    fn try_from(raw: RawScale) -> Result<Self> {
        if !(raw.data_min.is_finite() && raw.data_max.is_finite()) || raw.data_max <= raw.data_min {
            return Err(FtsError::invalid_parameter(
                "data",
                "range must be finite with min < max",
            ));
        }
        Self::checked(raw.data_min, raw.data_max, raw.target_min, raw.target_max)
    }
}

impl Scale {
    /// Fit the source range from `data`
    pub fn fit(data: &[f64], target_min: f64, target_max: f64) -> Result<Self> {
        let (data_min, data_max) = data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if !data_min.is_finite() {
            return Err(FtsError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if data_max <= data_min {
            return Err(FtsError::InvalidData("cannot scale a constant series".to_string()));
        }
        Self::checked(data_min, data_max, target_min, target_max)
    }

    fn checked(data_min: f64, data_max: f64, target_min: f64, target_max: f64) -> Result<Self> {
        if !(target_min.is_finite() && target_max.is_finite()) || target_max <= target_min {
            return Err(FtsError::invalid_parameter(
                "target",
                "range must be finite with min < max",
            ));
        }

        Ok(Self {
            data_min,
            data_max,
            target_min,
            target_max,
        })
    }

    fn ratio(&self) -> f64 {
        (self.target_max - self.target_min) / (self.data_max - self.data_min)
    }
}

impl Transformation for Scale {
    fn apply(&self, data: &[f64]) -> Result<Vec<f64>> {
        let ratio = self.ratio();
        Ok(data
            .iter()
            .map(|x| (x - self.data_min) * ratio + self.target_min)
            .collect())
    }

    fn inverse(&self, data: &[f64], _context: &[f64]) -> Result<Vec<f64>> {
        let ratio = self.ratio();
        Ok(data
            .iter()
            .map(|y| (y - self.target_min) / ratio + self.data_min)
            .collect())
    }

    fn name(&self) -> &str {
        "scale"
    }
}
