//! Partitioning strategies
//!
//! Each strategy implements [`fts_spi::Partitioning`]:
//!
//! - [`GridPartitioning`]: equal-width sets
//! - [`EqualFrequencyPartitioning`]: sets centred on data quantiles
//! - [`CMeansPartitioning`]: sets centred on 1-d cluster centres

mod cmeans;
mod equal_frequency;
mod grid;

pub use cmeans::CMeansPartitioning;
pub use equal_frequency::EqualFrequencyPartitioning;
pub use grid::GridPartitioning;

use fts_spi::{FtsError, FuzzySet, PartitionerConfig, Result, Universe};

/// Triangular sets over strictly increasing anchor points
///
/// The universe bounds act as outer anchors; every interior point becomes
/// the peak of a triangle reaching to its neighbours.
fn anchored_triangles(
    centres: &[f64],
    universe: Universe,
    config: &PartitionerConfig,
) -> Result<Vec<FuzzySet>> {
    let mut anchors = Vec::with_capacity(centres.len() + 2);
    for point in std::iter::once(universe.min)
        .chain(centres.iter().copied())
        .chain(std::iter::once(universe.max))
    {
        if anchors.last().map_or(true, |last| point > *last) {
            anchors.push(point);
        }
    }

    if anchors.len() < 3 {
        return Err(FtsError::InvalidData(
            "universe of discourse is too narrow to partition".to_string(),
        ));
    }

    anchors
        .windows(3)
        .enumerate()
        .map(|(k, w)| FuzzySet::triangular(config.set_name(k), w[0], w[1], w[2]))
        .collect()
}

/// Linear-interpolated quantile of sorted data, `q` in `[0, 1]`
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

/// Finite values of `data`, ascending
fn sorted_finite(data: &[f64]) -> Result<Vec<f64>> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Err(FtsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Quantile centres `(k + 0.5) / n` for `k` in `0..n`
fn quantile_centres(sorted: &[f64], n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| quantile(sorted, (k as f64 + 0.5) / n as f64))
        .collect()
}
