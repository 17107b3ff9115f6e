//! Partitioning strategy trait

use crate::error::Result;
use crate::model::{FuzzySet, PartitionerConfig, Universe};

/// Fuzzy sets produced by a partitioning strategy
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Sets in creation order
    pub sets: Vec<FuzzySet>,
    /// Universe after any adjustment the strategy makes
    pub universe: Universe,
}

/// Strategy that splits a universe of discourse into fuzzy sets
///
/// Implementations receive the training data and the margin-expanded
/// universe, and return the sets together with the (possibly adjusted)
/// universe. Equal-width, equal-frequency and clustering strategies all
/// plug in through this single operation.
///
/// # Example
///
/// ```rust,ignore
/// use fts_spi::{Partitioning, PartitionerConfig, Universe};
///
/// fn count_sets<P: Partitioning>(strategy: &P, data: &[f64]) -> fts_spi::Result<usize> {
///     let config = PartitionerConfig::default();
///     let universe = Universe::from_data(data, config.lower_margin(), config.upper_margin())?;
///     Ok(strategy.build(data, universe, &config)?.sets.len())
/// }
/// ```
pub trait Partitioning: Send + Sync {
    /// Short name of the strategy
    fn name(&self) -> &str;

    /// Build the fuzzy sets for `data` over `universe`
    fn build(&self, data: &[f64], universe: Universe, config: &PartitionerConfig) -> Result<Partition>;
}
