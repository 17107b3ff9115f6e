//! Equal-frequency partitioning

use fts_spi::{Partition, PartitionerConfig, Partitioning, Result, Universe};

use super::{anchored_triangles, quantile_centres, sorted_finite};

/// Centres sets on data quantiles so each covers a similar share of points
///
/// Centroids are the `(k + 0.5) / n` quantiles; sets are triangles spanning
/// neighbouring centroids, with the universe bounds as outer vertices.
/// Repeated quantiles collapse, so heavily tied data can yield fewer sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualFrequencyPartitioning;

impl Partitioning for EqualFrequencyPartitioning {
    fn name(&self) -> &str {
        "equal-frequency"
    }

    fn build(&self, data: &[f64], universe: Universe, config: &PartitionerConfig) -> Result<Partition> {
        let sorted = sorted_finite(data)?;
        let centres = quantile_centres(&sorted, config.partitions);
        let sets = anchored_triangles(&centres, universe, config)?;

        Ok(Partition { sets, universe })
    }
}
