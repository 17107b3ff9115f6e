//! Differential transformation

use fts_spi::{FtsError, Result, Transformation};
use serde::{Deserialize, Serialize};

/// Replace each value with its change over `lag` steps
///
/// The output keeps the input length; the first `lag` positions are zero.
/// The inverse treats `data[t]` as the forecast change following
/// `context[t]` and adds it to the value `lag - 1` steps earlier, so that
/// a one-step-ahead forecast of the difference becomes a forecast of the
/// next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDifferential")]
pub struct Differential {
    lag: usize,
}

#[derive(Deserialize)]
struct RawDifferential {
    lag: usize,
}

impl TryFrom<RawDifferential> for Differential {
    type Error = FtsError;

    fn try_from(raw: RawDifferential) -> Result<Self> {
        Self::new(raw.lag)
    }
}

impl Differential {
    pub fn new(lag: usize) -> Result<Self> {
        if lag < 1 {
            return Err(FtsError::invalid_parameter("lag", "must be at least 1"));
        }
        Ok(Self { lag })
    }

    pub fn lag(&self) -> usize {
        self.lag
    }
}

impl Transformation for Differential {
    fn apply(&self, data: &[f64]) -> Result<Vec<f64>> {
        let diff = (0..data.len())
            .map(|t| {
                if t < self.lag {
                    0.0
                } else {
                    data[t] - data[t - self.lag]
                }
            })
            .collect();
        Ok(diff)
    }

    fn inverse(&self, data: &[f64], context: &[f64]) -> Result<Vec<f64>> {
        if data.len() != context.len() {
            return Err(FtsError::DimensionMismatch {
                expected: context.len(),
                actual: data.len(),
            });
        }

        let restored = data
            .iter()
            .enumerate()
            .map(|(t, delta)| {
                let base = (t + 1).checked_sub(self.lag).unwrap_or(t);
                context[base] + delta
            })
            .collect();
        Ok(restored)
    }

    fn name(&self) -> &str {
        "differential"
    }
}
