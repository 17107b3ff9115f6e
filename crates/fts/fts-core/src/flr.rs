//! Fuzzy logical relationships (transition pairs)
//!
//! A relationship `A -> B` records that set `A` was observed at time `t`
//! and set `B` at time `t + 1`. Sets are referenced by their position in a
//! [`Partitioner`]; the relationship owns nothing.

use std::fmt;

use fts_spi::Result;
use serde::{Deserialize, Serialize};

use crate::partitioner::Partitioner;

/// Ordered transition between two fuzzy sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flr {
    /// Set observed at time `t`
    pub lhs: usize,
    /// Set observed at time `t + 1`
    pub rhs: usize,
}

impl Flr {
    pub fn new(lhs: usize, rhs: usize) -> Self {
        Self { lhs, rhs }
    }

    /// Render with set names, e.g. `A1 -> A2`
    pub fn describe(&self, partitioner: &Partitioner) -> Result<String> {
        Ok(format!(
            "{} -> {}",
            partitioner.get(self.lhs)?.name(),
            partitioner.get(self.rhs)?.name()
        ))
    }
}

impl fmt::Display for Flr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.lhs, self.rhs)
    }
}

/// Which consecutive transitions are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePolicy {
    /// Every transition, repeats included
    Recurrent,
    /// A transition identical to the previously emitted one is dropped
    #[default]
    NonRecurrent,
}

/// Transitions between consecutive positions of a fuzzified series
///
/// Under [`RecurrencePolicy::NonRecurrent`] only adjacent duplicates
/// collapse: `A->A, A->A, A->B, A->A` yields `A->A, A->B, A->A`.
pub fn generate(series: &[usize], policy: RecurrencePolicy) -> Vec<Flr> {
    let mut flrs: Vec<Flr> = Vec::with_capacity(series.len().saturating_sub(1));

    for pair in series.windows(2) {
        let flr = Flr::new(pair[0], pair[1]);
        if policy == RecurrencePolicy::NonRecurrent && flrs.last() == Some(&flr) {
            continue;
        }
        flrs.push(flr);
    }

    flrs
}
