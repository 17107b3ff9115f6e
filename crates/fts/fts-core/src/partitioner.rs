//! Universe-of-discourse partitioner
//!
//! Owns the fuzzy sets covering a universe of discourse, keeps them ordered
//! by centroid, and converts between numeric values and fuzzy
//! representations.
//!
//! ## Fuzzification
//!
//! 1. Assign values outside the universe fully to the boundary set: the
//!    first set below the minimum, the last set above the maximum
//! 2. Find candidate sets: the `k` nearest through the spatial index, or all
//!    sets for an exhaustive search
//! 3. Evaluate candidate memberships, zeroing those below the alpha cut
//! 4. If nothing is activated, assign the value fully to the set with the
//!    nearest centroid

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use fts_spi::{
    DefuzzifyMode, FtsError, FuzzifyMethod, FuzzifyMode, FuzzifyOptions, Fuzzified, FuzzySet,
    PartitionerConfig, Partitioning, Result, SearchScope, Universe,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::SetIndex;

/// Fuzzy set vocabulary over a bounded universe of discourse
///
/// @complexity O(n log n) index build (once), O(log n + k) per fuzzification
/// @thread_safe true (the index is built once under a `OnceLock`)
/// @since 0.1.0
///
/// # Example
///
/// ```rust
/// use fts_core::{GridPartitioning, Partitioner};
/// use fts_spi::{FuzzifyOptions, Fuzzified, PartitionerConfig};
///
/// let data: Vec<f64> = (0..=100).map(|x| x as f64).collect();
/// let partitioner = Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(5)).unwrap();
///
/// let fuzzified = partitioner.fuzzify(44.0, &FuzzifyOptions::maximum()).unwrap();
/// assert_eq!(fuzzified, Fuzzified::Set("A2".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawPartitioner")]
pub struct Partitioner {
    name: String,
    /// Sets ordered by centroid
    sets: Vec<FuzzySet>,
    /// Set name to position in `sets`
    positions: HashMap<String, usize>,
    universe: Universe,
    config: PartitionerConfig,
    #[serde(skip)]
    index: OnceLock<SetIndex>,
}

/// Serialized form, reassembled on load so ordering and lookups are rebuilt
#[derive(Deserialize)]
struct RawPartitioner {
    name: String,
    sets: Vec<FuzzySet>,
    universe: Universe,
    config: PartitionerConfig,
}

impl TryFrom<RawPartitioner> for Partitioner {
    type Error = FtsError;

    fn try_from(raw: RawPartitioner) -> Result<Self> {
        raw.config.validate()?;
        Self::assemble(&raw.name, raw.sets, raw.universe, raw.config)
    }
}

impl Partitioner {
    /// Partition the universe spanned by `data` with `strategy`
    pub fn new<P: Partitioning + ?Sized>(
        strategy: &P,
        data: &[f64],
        config: PartitionerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let universe = Universe::from_data(data, config.lower_margin(), config.upper_margin())?;
        let partition = strategy.build(data, universe, &config)?;

        let partitioner = Self::assemble(strategy.name(), partition.sets, partition.universe, config)?;
        debug!(
            strategy = strategy.name(),
            partitions = partitioner.len(),
            min = partitioner.universe.min,
            max = partitioner.universe.max,
            "built partitioner"
        );
        Ok(partitioner)
    }

    /// Partitioner over explicitly given sets
    ///
    /// The universe is the hull of the set supports.
    pub fn from_sets(sets: Vec<FuzzySet>) -> Result<Self> {
        let first = sets.first().ok_or(FtsError::InsufficientData {
            required: 1,
            actual: 0,
        })?;
        let universe = Universe::new(first.lower(), first.upper())?;
        let config = PartitionerConfig::with_partitions(sets.len());

        Self::assemble("simple", sets, universe, config)
    }

    fn assemble(
        name: &str,
        mut sets: Vec<FuzzySet>,
        universe: Universe,
        mut config: PartitionerConfig,
    ) -> Result<Self> {
        if sets.is_empty() {
            return Err(FtsError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        sets.sort_by(|a, b| a.centroid().total_cmp(&b.centroid()));

        let mut positions = HashMap::with_capacity(sets.len());
        for (position, set) in sets.iter().enumerate() {
            if positions.insert(set.name().to_string(), position).is_some() {
                return Err(FtsError::invalid_parameter(
                    "names",
                    format!("duplicate fuzzy set name '{}'", set.name()),
                ));
            }
        }

        let universe = sets
            .iter()
            .fold(universe, |u, set| u.covering(set.lower(), set.upper()));
        config.partitions = sets.len();

        Ok(Self {
            name: name.to_string(),
            sets,
            positions,
            universe,
            config,
            index: OnceLock::new(),
        })
    }

    /// Re-partition from new data, keeping the configuration
    ///
    /// Replaces every set and drops the spatial index.
    pub fn rebuild<P: Partitioning + ?Sized>(&mut self, strategy: &P, data: &[f64]) -> Result<()> {
        *self = Self::new(strategy, data, self.config.clone())?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of fuzzy sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn config(&self) -> &PartitionerConfig {
        &self.config
    }

    /// Default fuzzification options searching the configured neighbour count
    pub fn options(&self) -> FuzzifyOptions {
        FuzzifyOptions::default().with_neighbors(self.config.neighbors)
    }

    /// Set at `index` in centroid order
    pub fn get(&self, index: usize) -> Result<&FuzzySet> {
        self.sets.get(index).ok_or(FtsError::IndexOutOfRange {
            index,
            len: self.sets.len(),
        })
    }

    /// Set with the given name
    pub fn by_name(&self, name: &str) -> Result<&FuzzySet> {
        let position = self.index_of(name)?;
        Ok(&self.sets[position])
    }

    /// Position of the named set in centroid order
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| FtsError::UnknownSet(name.to_string()))
    }

    /// Set covering the lower end of the universe
    pub fn lower_set(&self) -> &FuzzySet {
        &self.sets[0]
    }

    /// Set covering the upper end of the universe
    pub fn upper_set(&self) -> &FuzzySet {
        &self.sets[self.sets.len() - 1]
    }

    /// Sets in centroid order
    pub fn iter(&self) -> std::slice::Iter<'_, FuzzySet> {
        self.sets.iter()
    }

    pub fn sets(&self) -> &[FuzzySet] {
        &self.sets
    }

    pub fn names(&self) -> Vec<&str> {
        self.sets.iter().map(FuzzySet::name).collect()
    }

    pub fn centroids(&self) -> Vec<f64> {
        self.sets.iter().map(FuzzySet::centroid).collect()
    }

    fn index(&self) -> &SetIndex {
        self.index.get_or_init(|| {
            let points = self
                .sets
                .iter()
                .map(|set| [set.lower(), set.centroid(), set.upper()])
                .collect();
            debug!(sets = self.sets.len(), "building fuzzy set index");
            SetIndex::build(points)
        })
    }

    /// Indices of the `k` sets nearest to `value`, ascending
    ///
    /// Builds the spatial index on first use.
    pub fn search(&self, value: f64, k: usize) -> Vec<usize> {
        self.index().nearest([value; 3], k)
    }

    /// Boundary set for a value outside the universe
    ///
    /// Returns the first set below the minimum, the last set above the
    /// maximum, and `None` inside the universe.
    pub fn check_bounds(&self, value: f64) -> Option<usize> {
        if value < self.universe.min {
            Some(0)
        } else if value > self.universe.max {
            Some(self.sets.len() - 1)
        } else {
            None
        }
    }

    /// Set whose centroid is closest to `value`, lower index on ties
    pub fn nearest_centroid(&self, value: f64) -> usize {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| (i, (set.centroid() - value).abs()))
            .fold((0, f64::INFINITY), |best, (i, distance)| {
                if distance < best.1 {
                    (i, distance)
                } else {
                    best
                }
            })
            .0
    }

    /// Membership of `value` in every set, without cut or fallback
    pub fn memberships(&self, value: f64) -> Vec<f64> {
        self.sets.iter().map(|set| set.membership(value)).collect()
    }

    /// Membership vector after boundary check, candidate search, alpha cut
    /// and fallback
    ///
    /// Never all-zero. A value outside the universe is assigned fully to the
    /// boundary set whatever the membership shapes, and a value inside it
    /// that activates nothing goes to the nearest set.
    pub fn activation(&self, value: f64, alpha_cut: f64, scope: SearchScope) -> Result<Vec<f64>> {
        if value.is_nan() {
            return Err(FtsError::InvalidData("cannot fuzzify NaN".to_string()));
        }

        let mut activation = vec![0.0_f64; self.sets.len()];
        if let Some(boundary) = self.check_bounds(value) {
            activation[boundary] = 1.0;
            return Ok(activation);
        }

        let candidates: Vec<usize> = match scope {
            SearchScope::Nearest(k) => self.search(value, k),
            SearchScope::All => (0..self.sets.len()).collect(),
        };
        for ix in candidates {
            let membership = self.sets[ix].membership(value);
            activation[ix] = if membership >= alpha_cut { membership } else { 0.0 };
        }

        if activation.iter().all(|m| *m <= 0.0) {
            activation[self.nearest_centroid(value)] = 1.0;
        }

        Ok(activation)
    }

    /// Index of the most activated set, first in order on ties
    pub fn maximum_index(&self, value: f64, scope: SearchScope) -> Result<usize> {
        let activation = self.activation(value, 0.0, scope)?;
        Ok(argmax_first(&activation))
    }

    /// Fuzzify a single value
    pub fn fuzzify(&self, value: f64, options: &FuzzifyOptions) -> Result<Fuzzified> {
        let activation = self.activation(value, options.alpha_cut, options.scope)?;

        let result = match options.method {
            FuzzifyMethod::Fuzzy => match options.mode {
                FuzzifyMode::Vector => Fuzzified::Vector(activation),
                FuzzifyMode::Sets => Fuzzified::Sets(
                    active(&activation)
                        .map(|(i, _)| self.sets[i].name().to_string())
                        .collect(),
                ),
                FuzzifyMode::Both => Fuzzified::Both(
                    active(&activation)
                        .map(|(i, m)| (self.sets[i].name().to_string(), m))
                        .collect(),
                ),
            },
            FuzzifyMethod::Maximum => {
                let best = argmax_first(&activation);
                let name = self.sets[best].name().to_string();
                match options.mode {
                    FuzzifyMode::Sets => Fuzzified::Set(name),
                    FuzzifyMode::Vector => {
                        let mut vector = vec![0.0_f64; self.sets.len()];
                        vector[best] = activation[best];
                        Fuzzified::Vector(vector)
                    }
                    FuzzifyMode::Both => Fuzzified::Both(vec![(name, activation[best])]),
                }
            }
        };

        Ok(result)
    }

    /// Fuzzify each value of a series, preserving order
    pub fn fuzzify_series(&self, data: &[f64], options: &FuzzifyOptions) -> Result<Vec<Fuzzified>> {
        data.iter().map(|&value| self.fuzzify(value, options)).collect()
    }

    /// Convert a fuzzy representation back to a scalar
    ///
    /// `Both` and `Vector` take the membership-weighted mean of centroids and
    /// fail with [`FtsError::ZeroWeight`] when all weights are zero. `Sets`
    /// takes the plain mean of the named sets' centroids.
    pub fn defuzzify(&self, values: &Fuzzified, mode: DefuzzifyMode) -> Result<f64> {
        match (mode, values) {
            (DefuzzifyMode::Both, Fuzzified::Both(pairs)) => {
                let weighted = pairs
                    .iter()
                    .map(|(name, m)| Ok((self.by_name(name)?.centroid(), *m)))
                    .collect::<Result<Vec<_>>>()?;
                weighted_centroid(&weighted)
            }
            (DefuzzifyMode::Vector, Fuzzified::Vector(vector)) => {
                if vector.len() != self.sets.len() {
                    return Err(FtsError::DimensionMismatch {
                        expected: self.sets.len(),
                        actual: vector.len(),
                    });
                }
                let weighted: Vec<(f64, f64)> = self
                    .sets
                    .iter()
                    .zip(vector.iter())
                    .map(|(set, m)| (set.centroid(), *m))
                    .collect();
                weighted_centroid(&weighted)
            }
            (DefuzzifyMode::Sets, Fuzzified::Sets(_))
            | (DefuzzifyMode::Sets, Fuzzified::Set(_))
            | (DefuzzifyMode::Sets, Fuzzified::Both(_)) => {
                let names = values.set_names();
                if names.is_empty() {
                    return Err(FtsError::InsufficientData {
                        required: 1,
                        actual: 0,
                    });
                }
                let sum = names
                    .iter()
                    .map(|name| Ok(self.by_name(name)?.centroid()))
                    .sum::<Result<f64>>()?;
                Ok(sum / names.len() as f64)
            }
            (mode, values) => Err(FtsError::invalid_parameter(
                "mode",
                format!(
                    "{mode:?} defuzzification cannot consume {} values",
                    variant_name(values)
                ),
            )),
        }
    }

    /// Defuzzify each element of a series
    pub fn defuzzify_series(&self, values: &[Fuzzified], mode: DefuzzifyMode) -> Result<Vec<f64>> {
        values.iter().map(|v| self.defuzzify(v, mode)).collect()
    }
}

fn weighted_centroid(weighted: &[(f64, f64)]) -> Result<f64> {
    let (numerator, denominator) = weighted
        .iter()
        .fold((0.0_f64, 0.0_f64), |(num, den), (centroid, m)| (num + centroid * m, den + m));
    if denominator == 0.0 {
        return Err(FtsError::ZeroWeight);
    }
    let centroid = numerator / denominator;
    if !centroid.is_finite() {
        return Err(FtsError::NumericalError(format!(
            "weighted centroid is {centroid}"
        )));
    }
    Ok(centroid)
}

fn active(activation: &[f64]) -> impl Iterator<Item = (usize, f64)> + '_ {
    activation
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, m)| *m > 0.0)
}

fn argmax_first(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}

fn variant_name(values: &Fuzzified) -> &'static str {
    match values {
        Fuzzified::Sets(_) => "sets",
        Fuzzified::Set(_) => "single set",
        Fuzzified::Vector(_) => "vector",
        Fuzzified::Both(_) => "(set, membership)",
    }
}

impl fmt::Display for Partitioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        for set in &self.sets {
            writeln!(f, "{set}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioning::GridPartitioning;
    use fts_spi::MembershipKind;

    fn three_sets() -> Partitioner {
        Partitioner::from_sets(vec![
            FuzzySet::triangular("B", 1.0, 3.0, 5.0).unwrap(),
            FuzzySet::triangular("A", -1.0, 1.0, 3.0).unwrap(),
            FuzzySet::triangular("C", 3.0, 5.0, 7.0).unwrap(),
        ])
        .unwrap()
    }

    fn grid(partitions: usize) -> Partitioner {
        let data: Vec<f64> = (0..=10).map(|x| x as f64).collect();
        Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(partitions)).unwrap()
    }

    #[test]
    fn test_from_sets_orders_by_centroid() {
        let p = three_sets();
        assert_eq!(p.names(), vec!["A", "B", "C"]);
        assert_eq!(p.centroids(), vec![1.0, 3.0, 5.0]);
        assert_eq!(p.universe(), Universe { min: -1.0, max: 7.0 });
        assert_eq!(p.lower_set().name(), "A");
        assert_eq!(p.upper_set().name(), "C");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Partitioner::from_sets(vec![
            FuzzySet::triangular("A", 0.0, 1.0, 2.0).unwrap(),
            FuzzySet::triangular("A", 1.0, 2.0, 3.0).unwrap(),
        ]);
        assert!(matches!(result, Err(FtsError::InvalidParameter { .. })));
        assert!(Partitioner::from_sets(Vec::new()).is_err());
    }

    #[test]
    fn test_lookup_errors() {
        let p = three_sets();
        assert_eq!(p.get(1).unwrap().name(), "B");
        assert_eq!(p.get(3).unwrap_err(), FtsError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(p.by_name("C").unwrap().centroid(), 5.0);
        assert_eq!(p.by_name("Z").unwrap_err(), FtsError::UnknownSet("Z".to_string()));
    }

    #[test]
    fn test_search_returns_k_distinct_ascending() {
        let p = grid(10);
        for value in [-3.0, 0.0, 2.5, 7.7, 11.0, 40.0] {
            for k in 1..=10 {
                let found = p.search(value, k);
                assert_eq!(found.len(), k);
                assert!(found.windows(2).all(|w| w[0] < w[1]));
                assert!(found.iter().all(|&i| i < p.len()));
            }
        }
    }

    #[test]
    fn test_fuzzify_sets_and_both() {
        let p = three_sets();
        let sets = p.fuzzify(2.0, &FuzzifyOptions::default()).unwrap();
        assert_eq!(sets, Fuzzified::Sets(vec!["A".to_string(), "B".to_string()]));

        let both = p.fuzzify(2.0, &FuzzifyOptions::both()).unwrap();
        assert_eq!(
            both,
            Fuzzified::Both(vec![("A".to_string(), 0.5), ("B".to_string(), 0.5)])
        );
    }

    #[test]
    fn test_fuzzify_alpha_cut() {
        let p = three_sets();
        let options = FuzzifyOptions::both().with_alpha_cut(0.6);
        match p.fuzzify(2.6, &options).unwrap() {
            Fuzzified::Both(pairs) => {
                assert_eq!(pairs.len(), 1);
                assert_eq!(pairs[0].0, "B");
                assert!((pairs[0].1 - 0.8).abs() < 1e-10);
            }
            other => panic!("Expected Both, got {other:?}"),
        }
    }

    #[test]
    fn test_fuzzify_maximum_ties_take_first() {
        let p = three_sets();
        let result = p.fuzzify(2.0, &FuzzifyOptions::maximum()).unwrap();
        assert_eq!(result, Fuzzified::Set("A".to_string()));
    }

    #[test]
    fn test_boundary_policy() {
        let p = three_sets();
        let below = p.fuzzify(-50.0, &FuzzifyOptions::vector()).unwrap();
        assert_eq!(below, Fuzzified::Vector(vec![1.0, 0.0, 0.0]));

        let above = p.fuzzify(50.0, &FuzzifyOptions::both()).unwrap();
        assert_eq!(above, Fuzzified::Both(vec![("C".to_string(), 1.0)]));

        let neg_inf = p.fuzzify(f64::NEG_INFINITY, &FuzzifyOptions::maximum()).unwrap();
        assert_eq!(neg_inf, Fuzzified::Set("A".to_string()));

        assert_eq!(p.check_bounds(-2.0), Some(0));
        assert_eq!(p.check_bounds(8.0), Some(2));
        assert_eq!(p.check_bounds(4.0), None);

        let config = PartitionerConfig {
            membership: MembershipKind::Gaussian,
            ..PartitionerConfig::with_partitions(5)
        };
        let data: Vec<f64> = (0..=10).map(|x| x as f64).collect();
        let gaussian = Partitioner::new(&GridPartitioning, &data, config).unwrap();
        let Universe { min, max } = gaussian.universe();

        let below = gaussian.fuzzify(min - 0.5, &FuzzifyOptions::both()).unwrap();
        assert_eq!(below, Fuzzified::Both(vec![("A0".to_string(), 1.0)]));
        let above = gaussian.fuzzify(max + 0.5, &FuzzifyOptions::both()).unwrap();
        assert_eq!(above, Fuzzified::Both(vec![("A4".to_string(), 1.0)]));
        let all = FuzzifyOptions::vector().exhaustive();
        assert_eq!(
            gaussian.fuzzify(min - 100.0, &all).unwrap(),
            Fuzzified::Vector(vec![1.0, 0.0, 0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_concurrent_first_search() {
        let partitioner = grid(12);
        let queries: Vec<f64> = (0..40).map(|i| -2.0 + i as f64 * 0.35).collect();
        let (p, queries) = (&partitioner, &queries);

        let results: Vec<Vec<Vec<usize>>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || queries.iter().map(|&q| p.search(q, 3)).collect::<Vec<_>>())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let expected: Vec<Vec<usize>> = queries.iter().map(|&q| p.search(q, 3)).collect();
        for result in results {
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_deserialize_reassembles() {
        let p = three_sets();
        let mut json = serde_json::to_value(&p).unwrap();
        json["sets"].as_array_mut().unwrap().reverse();
        json["positions"] = serde_json::json!({});

        let loaded: Partitioner = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(loaded.names(), vec!["A", "B", "C"]);
        assert_eq!(loaded.index_of("C").unwrap(), 2);
        assert_eq!(loaded.search(5.0, 1), vec![2]);

        let mut empty = json;
        empty["sets"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Partitioner>(empty).is_err());
    }

    #[test]
    fn test_gap_assigned_to_nearest_centroid() {
        let p = Partitioner::from_sets(vec![
            FuzzySet::triangular("L", 0.0, 1.0, 2.0).unwrap(),
            FuzzySet::triangular("R", 6.0, 7.0, 8.0).unwrap(),
        ])
        .unwrap();
        let result = p.fuzzify(4.5, &FuzzifyOptions::vector()).unwrap();
        assert_eq!(result, Fuzzified::Vector(vec![0.0, 1.0]));
    }

    #[test]
    fn test_nan_is_rejected() {
        let p = three_sets();
        assert!(matches!(
            p.fuzzify(f64::NAN, &FuzzifyOptions::default()),
            Err(FtsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_defuzzify_modes() {
        let p = three_sets();
        let both = Fuzzified::Both(vec![("A".to_string(), 0.25), ("B".to_string(), 0.75)]);
        assert!((p.defuzzify(&both, DefuzzifyMode::Both).unwrap() - 2.5).abs() < 1e-10);

        let vector = Fuzzified::Vector(vec![0.0, 1.0, 1.0]);
        assert!((p.defuzzify(&vector, DefuzzifyMode::Vector).unwrap() - 4.0).abs() < 1e-10);

        let sets = Fuzzified::Sets(vec!["A".to_string(), "C".to_string()]);
        assert!((p.defuzzify(&sets, DefuzzifyMode::Sets).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_defuzzify_errors() {
        let p = three_sets();
        let zero = Fuzzified::Vector(vec![0.0, 0.0, 0.0]);
        assert_eq!(p.defuzzify(&zero, DefuzzifyMode::Vector).unwrap_err(), FtsError::ZeroWeight);

        let short = Fuzzified::Vector(vec![1.0]);
        assert!(matches!(
            p.defuzzify(&short, DefuzzifyMode::Vector),
            Err(FtsError::DimensionMismatch { expected: 3, actual: 1 })
        ));

        let unknown = Fuzzified::Both(vec![("Q".to_string(), 1.0)]);
        assert_eq!(
            p.defuzzify(&unknown, DefuzzifyMode::Both).unwrap_err(),
            FtsError::UnknownSet("Q".to_string())
        );

        let mismatched = Fuzzified::Sets(vec!["A".to_string()]);
        assert!(matches!(
            p.defuzzify(&mismatched, DefuzzifyMode::Vector),
            Err(FtsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_defuzzify_overflow() {
        let p = Partitioner::from_sets(vec![
            FuzzySet::triangular("X", 1.0e308, 1.2e308, 1.4e308).unwrap(),
            FuzzySet::triangular("Y", 1.2e308, 1.4e308, 1.6e308).unwrap(),
        ])
        .unwrap();
        let result = p.defuzzify(&Fuzzified::Vector(vec![1.0, 1.0]), DefuzzifyMode::Vector);
        assert!(matches!(result, Err(FtsError::NumericalError(_))));
    }

    #[test]
    fn test_roundtrip_at_centroids() {
        let p = grid(7);
        for set in p.iter() {
            let fuzzified = p.fuzzify(set.centroid(), &FuzzifyOptions::both()).unwrap();
            let value = p.defuzzify(&fuzzified, DefuzzifyMode::Both).unwrap();
            assert!((value - set.centroid()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_options_use_configured_neighbors() {
        let config = PartitionerConfig {
            neighbors: 5,
            ..PartitionerConfig::with_partitions(8)
        };
        let partitioner = Partitioner::new(&GridPartitioning, &[0.0, 10.0], config).unwrap();
        assert_eq!(partitioner.options().scope, SearchScope::Nearest(5));
    }

    #[test]
    fn test_rebuild_replaces_sets() {
        let mut p = grid(5);
        let _ = p.search(3.0, 3);
        let data: Vec<f64> = (0..=100).map(|x| x as f64).collect();
        p.rebuild(&GridPartitioning, &data).unwrap();
        assert_eq!(p.len(), 5);
        assert!(p.universe().max >= 100.0);
        assert_eq!(p.search(100.0, 1), vec![4]);
    }

    #[test]
    fn test_display_lists_sets() {
        let p = three_sets();
        let text = p.to_string();
        assert!(text.starts_with("simple:"));
        assert!(text.contains("B: triangular(1, 3, 5)"));
    }
}
