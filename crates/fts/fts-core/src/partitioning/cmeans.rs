//! Clustering-based partitioning

use fts_spi::{FtsError, Partition, PartitionerConfig, Partitioning, Result, Universe};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{anchored_triangles, quantile_centres, sorted_finite};

/// Centres sets on 1-d c-means cluster centres
///
/// Cluster centres start at the equal-frequency quantiles, which keeps the
/// result deterministic, then alternate assignment and mean updates until
/// no centre moves more than `tolerance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CMeansPartitioning {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for CMeansPartitioning {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl CMeansPartitioning {
    pub fn new(max_iterations: usize, tolerance: f64) -> Result<Self> {
        if max_iterations < 1 {
            return Err(FtsError::invalid_parameter("max_iterations", "must be at least 1"));
        }
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(FtsError::invalid_parameter("tolerance", "must be non-negative"));
        }
        Ok(Self {
            max_iterations,
            tolerance,
        })
    }

    /// Cluster centres of `sorted`, ascending
    fn centres(&self, sorted: &[f64], k: usize) -> Vec<f64> {
        let mut centres = quantile_centres(sorted, k);

        for iteration in 0..self.max_iterations {
            let mut sums = vec![0.0_f64; k];
            let mut counts = vec![0usize; k];
            for &x in sorted {
                let nearest = nearest_centre(&centres, x);
                sums[nearest] += x;
                counts[nearest] += 1;
            }

            let mut shift: f64 = 0.0;
            for c in 0..k {
                if counts[c] > 0 {
                    let updated = sums[c] / counts[c] as f64;
                    shift = shift.max((updated - centres[c]).abs());
                    centres[c] = updated;
                }
            }

            if shift <= self.tolerance {
                debug!(iterations = iteration + 1, "c-means converged");
                break;
            }
        }

        centres.sort_by(f64::total_cmp);
        centres
    }
}

fn nearest_centre(centres: &[f64], x: f64) -> usize {
    centres
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, c)| {
            let distance = (c - x).abs();
            if distance < best.1 {
                (i, distance)
            } else {
                best
            }
        })
        .0
}

impl Partitioning for CMeansPartitioning {
    fn name(&self) -> &str {
        "cmeans"
    }

    fn build(&self, data: &[f64], universe: Universe, config: &PartitionerConfig) -> Result<Partition> {
        let sorted = sorted_finite(data)?;
        let centres = self.centres(&sorted, config.partitions);
        let sets = anchored_triangles(&centres, universe, config)?;

        Ok(Partition { sets, universe })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_separated_clusters() {
        let mut data = Vec::new();
        for centre in [10.0, 50.0, 90.0] {
            data.extend((0..20).map(|i| centre + (i as f64 - 10.0) * 0.1));
        }

        let strategy = CMeansPartitioning::default();
        let sorted = sorted_finite(&data).unwrap();
        let centres = strategy.centres(&sorted, 3);

        assert_eq!(centres.len(), 3);
        for (found, expected) in centres.iter().zip([9.95, 49.95, 89.95]) {
            assert!((found - expected).abs() < 1e-6, "centre {found} != {expected}");
        }
    }

    #[test]
    fn test_build_produces_ordered_triangles() {
        let data: Vec<f64> = (0..200).map(|i| ((i as f64) * 0.3).sin() * 20.0 + 50.0).collect();
        let config = PartitionerConfig::with_partitions(5);
        let universe = Universe::from_data(&data, 0.1, 0.1).unwrap();
        let partition = CMeansPartitioning::default().build(&data, universe, &config).unwrap();

        assert_eq!(partition.sets.len(), 5);
        assert_eq!(partition.sets[0].lower(), universe.min);
        assert_eq!(partition.sets[4].upper(), universe.max);
        assert!(partition.sets.windows(2).all(|w| w[0].centroid() < w[1].centroid()));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(CMeansPartitioning::new(0, 1e-6).is_err());
        assert!(CMeansPartitioning::new(10, -1.0).is_err());
        assert!(CMeansPartitioning::new(10, f64::NAN).is_err());
    }
}
