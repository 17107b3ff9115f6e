//! Transformation implementations
//!
//! - [`Differential`]: lagged differencing
//! - [`Scale`]: min-max rescaling
//!
//! [`TransformationStep`] is the closed set a model stores and persists.

mod differential;
mod scale;

pub use differential::Differential;
pub use scale::Scale;

use fts_spi::{Result, Transformation};
use serde::{Deserialize, Serialize};

/// Any transformation a model can carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformationStep {
    Differential(Differential),
    Scale(Scale),
}

impl Transformation for TransformationStep {
    fn apply(&self, data: &[f64]) -> Result<Vec<f64>> {
        match self {
            TransformationStep::Differential(t) => t.apply(data),
            TransformationStep::Scale(t) => t.apply(data),
        }
    }

    fn inverse(&self, data: &[f64], context: &[f64]) -> Result<Vec<f64>> {
        match self {
            TransformationStep::Differential(t) => t.inverse(data, context),
            TransformationStep::Scale(t) => t.inverse(data, context),
        }
    }

    fn name(&self) -> &str {
        match self {
            TransformationStep::Differential(t) => t.name(),
            TransformationStep::Scale(t) => t.name(),
        }
    }
}

impl TransformationStep {
    /// Leading outputs that carry no information about the input
    pub fn warmup(&self) -> usize {
        match self {
            TransformationStep::Differential(t) => t.lag(),
            TransformationStep::Scale(_) => 0,
        }
    }
}

impl From<Differential> for TransformationStep {
    fn from(step: Differential) -> Self {
        TransformationStep::Differential(step)
    }
}

impl From<Scale> for TransformationStep {
    fn from(step: Scale) -> Self {
        TransformationStep::Scale(step)
    }
}

/// Apply `steps` in order, returning every intermediate series
///
/// `stages[0]` is `data`; `stages[i + 1]` is the output of `steps[i]`.
pub fn apply_stages(steps: &[TransformationStep], data: &[f64]) -> Result<Vec<Vec<f64>>> {
    let mut stages = Vec::with_capacity(steps.len() + 1);
    stages.push(data.to_vec());
    for step in steps {
        let next = step.apply(&stages[stages.len() - 1])?;
        stages.push(next);
    }
    Ok(stages)
}

/// Undo `steps` in reverse order, each against the series it was applied to
pub fn inverse_stages(
    steps: &[TransformationStep],
    stages: &[Vec<f64>],
    data: Vec<f64>,
) -> Result<Vec<f64>> {
    steps
        .iter()
        .zip(stages.iter())
        .rev()
        .try_fold(data, |current, (step, context)| step.inverse(&current, context))
}
