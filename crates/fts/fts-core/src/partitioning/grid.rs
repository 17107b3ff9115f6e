//! Equal-width (grid) partitioning

use fts_spi::{
    FtsError, FuzzySet, MembershipFunction, MembershipKind, Partition, PartitionerConfig,
    Partitioning, Result, Universe,
};

/// Splits the universe into equally wide, overlapping sets
///
/// Centroids sit at `min + k * width / n`; each set reaches one partition
/// width to either side. The universe minimum is lowered by one width so the
/// first set's support stays inside it.
///
/// # Example
///
/// ```rust
/// use fts_core::{GridPartitioning, Partitioner};
/// use fts_spi::PartitionerConfig;
///
/// let data = vec![0.0, 10.0];
/// let partitioner = Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(5)).unwrap();
/// assert_eq!(partitioner.len(), 5);
/// assert!(partitioner.lower_set().lower() <= 0.0);
/// assert!(partitioner.upper_set().upper() >= 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPartitioning;

impl Partitioning for GridPartitioning {
    fn name(&self) -> &str {
        "grid"
    }

    fn build(&self, _data: &[f64], universe: Universe, config: &PartitionerConfig) -> Result<Partition> {
        let width = universe.width();
        if width <= 0.0 {
            return Err(FtsError::InvalidData(
                "universe of discourse has zero width".to_string(),
            ));
        }

        let n = config.partitions;
        let partlen = width / n as f64;

        let sets = (0..n)
            .map(|k| {
                let c = universe.min + k as f64 * partlen;
                let function = match config.membership {
                    MembershipKind::Triangular => MembershipFunction::Triangular {
                        a: c - partlen,
                        b: c,
                        c: c + partlen,
                    },
                    MembershipKind::Trapezoidal => {
                        let q = partlen / 2.0;
                        MembershipFunction::Trapezoidal {
                            a: c - partlen,
                            b: c - q,
                            c: c + q,
                            d: c + partlen,
                        }
                    }
                    MembershipKind::Gaussian => MembershipFunction::Gaussian {
                        mean: c,
                        sigma: partlen / 3.0,
                    },
                };
                FuzzySet::new(config.set_name(k), function)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Partition {
            sets,
            universe: Universe {
                min: universe.min - partlen,
                max: universe.max,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_sets_over_ten() {
        let config = PartitionerConfig::with_partitions(5);
        let universe = Universe::from_data(&[0.0, 10.0], 0.1, 0.1).unwrap();
        let partition = GridPartitioning.build(&[0.0, 10.0], universe, &config).unwrap();

        assert_eq!(partition.sets.len(), 5);
        assert!(partition.sets[0].lower() <= 0.0);
        assert!(partition.sets[4].upper() >= 10.0);
        assert!((partition.sets[1].centroid() - 2.2).abs() < 1e-10);
        assert!((partition.universe.min - -2.2).abs() < 1e-10);
        assert_eq!(partition.sets[3].name(), "A3");
    }

    #[test]
    fn test_neighbouring_sets_overlap() {
        let config = PartitionerConfig::with_partitions(4);
        let universe = Universe { min: 0.0, max: 8.0 };
        let partition = GridPartitioning.build(&[], universe, &config).unwrap();

        let sets = &partition.sets;
        let x = 3.0;
        let total: f64 = sets.iter().map(|s| s.membership(x)).sum();
        assert!((total - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_membership_kinds() {
        let universe = Universe { min: 0.0, max: 9.0 };
        for kind in [
            MembershipKind::Triangular,
            MembershipKind::Trapezoidal,
            MembershipKind::Gaussian,
        ] {
            let config = PartitionerConfig {
                partitions: 3,
                membership: kind,
                ..Default::default()
            };
            let partition = GridPartitioning.build(&[], universe, &config).unwrap();
            for set in &partition.sets {
                assert_eq!(set.membership(set.centroid()), 1.0);
                assert!((set.lower() - (set.centroid() - 3.0)).abs() < 1e-10);
                assert!((set.upper() - (set.centroid() + 3.0)).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = PartitionerConfig::default();
        let universe = Universe { min: 0.0, max: 0.0 };
        assert!(GridPartitioning.build(&[0.0], universe, &config).is_err());
    }
}
