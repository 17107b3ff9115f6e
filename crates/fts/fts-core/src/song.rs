//! First-order conventional fuzzy time series (Song & Chissom)
//!
//! ## How It Works
//!
//! 1. Fuzzify the training series, one most-activated set per point
//! 2. Extract non-recurrent transitions `A(t) -> A(t + 1)`
//! 3. For each transition build `min(lhs(c_i), rhs(c_j))` over every pair of
//!    set centroids and fold it into the relation by cell-wise maximum
//! 4. To forecast, compose the membership vector of each input with the
//!    relation (max-min) and defuzzify the most activated output sets
//!
//! Q. Song and B. S. Chissom, "Fuzzy time series and its models",
//! Fuzzy Sets and Systems, 54(3), 1993.

use std::fmt;
use std::sync::Arc;

use fts_spi::{FtsError, Forecaster, Result, SearchScope};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::flr::{self, RecurrencePolicy};
use crate::partitioner::Partitioner;
use crate::relation::RelationMatrix;
use crate::transformation::{apply_stages, inverse_stages, TransformationStep};

const ORDER: usize = 1;

/// Song & Chissom first-order fuzzy time series model
///
/// @algorithm ConventionalFTS
/// @category FuzzyTimeSeries
/// @complexity O(f*n^2) train for f transitions over n sets, O(n^2) per forecast
/// @thread_safe true (forecast takes `&self`; train requires `&mut self`)
/// @since 0.1.0
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use fts_core::{ConventionalFts, GridPartitioning, Partitioner};
/// use fts_spi::{Forecaster, PartitionerConfig};
///
/// let data: Vec<f64> = (0..60).map(|i| 50.0 + 10.0 * (i as f64 * 0.3).sin()).collect();
/// let partitioner = Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(8)).unwrap();
///
/// let mut model = ConventionalFts::new(Arc::new(partitioner));
/// model.train(&data).unwrap();
/// let forecast = model.forecast(&data[50..]).unwrap();
/// assert_eq!(forecast.len(), 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawConventionalFts")]
pub struct ConventionalFts {
    name: String,
    partitioner: Arc<Partitioner>,
    transformations: Vec<TransformationStep>,
    relation: Option<RelationMatrix>,
}

#[derive(Deserialize)]
struct RawConventionalFts {
    name: String,
    partitioner: Arc<Partitioner>,
    transformations: Vec<TransformationStep>,
    relation: Option<RelationMatrix>,
}

impl TryFrom<RawConventionalFts> for ConventionalFts {
    type Error = FtsError;

    fn try_from(raw: RawConventionalFts) -> Result<Self> {
        let model = match raw.relation {
            Some(relation) => Self::with_relation(raw.partitioner, relation)?,
            None => Self::new(raw.partitioner),
        };
        Ok(Self {
            name: raw.name,
            transformations: raw.transformations,
            ..model
        })
    }
}

impl ConventionalFts {
    /// Create an untrained model over `partitioner`'s sets
    pub fn new(partitioner: Arc<Partitioner>) -> Self {
        Self {
            name: "Conventional FTS".to_string(),
            partitioner,
            transformations: Vec::new(),
            relation: None,
        }
    }

    /// Create a trained model from an existing relation
    pub fn with_relation(partitioner: Arc<Partitioner>, relation: RelationMatrix) -> Result<Self> {
        if relation.dimension() != partitioner.len() {
            return Err(FtsError::DimensionMismatch {
                expected: partitioner.len(),
                actual: relation.dimension(),
            });
        }
        Ok(Self {
            relation: Some(relation),
            ..Self::new(partitioner)
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a transformation applied before fuzzification
    pub fn with_transformation(mut self, step: impl Into<TransformationStep>) -> Self {
        self.transformations.push(step.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn partitioner(&self) -> &Arc<Partitioner> {
        &self.partitioner
    }

    pub fn transformations(&self) -> &[TransformationStep] {
        &self.transformations
    }

    /// Learned relation, `None` until trained
    pub fn relation(&self) -> Option<&RelationMatrix> {
        self.relation.as_ref()
    }

    /// Leading transformed values skipped when learning
    pub fn warmup(&self) -> usize {
        self.transformations.iter().map(TransformationStep::warmup).sum()
    }

    /// Untrained copy sharing partitioner and transformations
    pub fn fresh(&self) -> Self {
        Self {
            name: self.name.clone(),
            partitioner: Arc::clone(&self.partitioner),
            transformations: self.transformations.clone(),
            relation: None,
        }
    }

    /// Replace the fuzzy sets and retrain on `data`
    pub fn train_with_sets(&mut self, data: &[f64], partitioner: Arc<Partitioner>) -> Result<()> {
        self.partitioner = partitioner;
        self.relation = None;
        self.train(data)
    }

    /// Build a relation from `data` without touching the model
    pub fn learn(&self, data: &[f64]) -> Result<RelationMatrix> {
        let stages = apply_stages(&self.transformations, data)?;
        let warmup = self.warmup();
        if data.len() < warmup + ORDER + 1 {
            return Err(FtsError::InsufficientData {
                required: warmup + ORDER + 1,
                actual: data.len(),
            });
        }
        let series = &stages[stages.len() - 1][warmup..];

        let fuzzified = series
            .iter()
            .map(|&value| self.partitioner.maximum_index(value, SearchScope::All))
            .collect::<Result<Vec<_>>>()?;
        let flrs = flr::generate(&fuzzified, RecurrencePolicy::NonRecurrent);

        let centroids = self.partitioner.centroids();
        let at_centroids = |set: usize| -> Result<Vec<f64>> {
            let set = self.partitioner.get(set)?;
            Ok(centroids.iter().map(|&c| set.membership(c)).collect())
        };

        let mut relation = RelationMatrix::zeros(self.partitioner.len());
        for flr in &flrs {
            let evidence = RelationMatrix::min_outer(&at_centroids(flr.lhs)?, &at_centroids(flr.rhs)?)?;
            relation.max_assign(&evidence)?;
        }

        debug!(
            model = %self.name,
            samples = series.len(),
            transitions = flrs.len(),
            "learned relation matrix"
        );
        Ok(relation)
    }

    /// Fold another model's relation into this one by cell-wise maximum
    ///
    /// Merging into an untrained model adopts the other relation; merging
    /// an untrained model is a no-op.
    pub fn merge(&mut self, other: &ConventionalFts) -> Result<()> {
        if other.partitioner.len() != self.partitioner.len() {
            return Err(FtsError::DimensionMismatch {
                expected: self.partitioner.len(),
                actual: other.partitioner.len(),
            });
        }

        match (&mut self.relation, &other.relation) {
            (_, None) => {}
            (None, Some(theirs)) => self.relation = Some(theirs.clone()),
            (Some(ours), Some(theirs)) => ours.max_assign(theirs)?,
        }
        Ok(())
    }

    /// Alias of [`Forecaster::forecast`]
    pub fn predict(&self, data: &[f64]) -> Result<Vec<f64>> {
        self.forecast(data)
    }

    /// Defuzzified forecast for a single transformed value
    fn forecast_value(&self, relation: &RelationMatrix, value: f64) -> Result<f64> {
        let memberships = self.partitioner.activation(value, 0.0, SearchScope::All)?;
        let composed = relation.compose(&memberships)?;

        let peak = composed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let centroids: Vec<f64> = composed
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == peak)
            .map(|(j, _)| self.partitioner.get(j).map(|set| set.centroid()))
            .collect::<Result<_>>()?;

        Ok(centroids.iter().sum::<f64>() / centroids.len() as f64)
    }
}

impl Forecaster for ConventionalFts {
    fn train(&mut self, data: &[f64]) -> Result<()> {
        let relation = self.learn(data)?;
        self.relation = Some(relation);
        Ok(())
    }

    fn forecast(&self, data: &[f64]) -> Result<Vec<f64>> {
        let relation = self.relation.as_ref().ok_or(FtsError::NotTrained)?;

        let stages = apply_stages(&self.transformations, data)?;
        let forecasts = stages[stages.len() - 1]
            .iter()
            .map(|&value| self.forecast_value(relation, value))
            .collect::<Result<Vec<_>>>()?;

        inverse_stages(&self.transformations, &stages, forecasts)
    }

    fn is_trained(&self) -> bool {
        self.relation.is_some()
    }

    fn order(&self) -> usize {
        ORDER
    }
}

impl fmt::Display for ConventionalFts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        match &self.relation {
            Some(relation) => write!(f, "{relation}"),
            None => writeln!(f, "untrained"),
        }
    }
}
