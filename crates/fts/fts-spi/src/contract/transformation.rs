//! Data transformation trait

use crate::error::Result;

/// Reversible transformation applied before fuzzification and undone after
/// defuzzification
///
/// `inverse` receives the untransformed input the forecast was produced
/// from as `context`, aligned position by position with `data`.
pub trait Transformation: Send + Sync {
    /// Transform a raw series
    fn apply(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Undo the transformation on `data` using the raw `context`
    fn inverse(&self, data: &[f64], context: &[f64]) -> Result<Vec<f64>>;

    /// Name of this transformation
    fn name(&self) -> &str;
}
