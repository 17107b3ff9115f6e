//! Fuzzy relation matrix

use std::fmt;

use fts_spi::{FtsError, Result};
use serde::{Deserialize, Serialize};

/// Square matrix of transition strengths in `[0, 1]`, row-major
///
/// Row `i` is the set observed at time `t`, column `j` the set observed at
/// time `t + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRelationMatrix")]
pub struct RelationMatrix {
    dimension: usize,
    cells: Vec<f64>,
}

/// Unchecked serialized form of [`RelationMatrix`]
#[derive(Deserialize)]
struct RawRelationMatrix {
    dimension: usize,
    cells: Vec<f64>,
}

impl TryFrom<RawRelationMatrix> for RelationMatrix {
    type Error = FtsError;

    fn try_from(raw: RawRelationMatrix) -> Result<Self> {
        let expected = raw
            .dimension
            .checked_mul(raw.dimension)
            .ok_or_else(|| FtsError::invalid_parameter("dimension", "overflows the cell count"))?;
        if raw.cells.len() != expected {
            return Err(FtsError::DimensionMismatch {
                expected,
                actual: raw.cells.len(),
            });
        }
        if let Some(cell) = raw.cells.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(FtsError::InvalidData(format!(
                "relation strength {cell} outside [0, 1]"
            )));
        }
        Ok(Self {
            dimension: raw.dimension,
            cells: raw.cells,
        })
    }
}

impl RelationMatrix {
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![0.0_f64; dimension * dimension],
        }
    }

    /// Matrix with `cells[i][j] = min(lhs[i], rhs[j])`
    pub fn min_outer(lhs: &[f64], rhs: &[f64]) -> Result<Self> {
        if lhs.len() != rhs.len() {
            return Err(FtsError::DimensionMismatch {
                expected: lhs.len(),
                actual: rhs.len(),
            });
        }
        let cells = lhs
            .iter()
            .flat_map(|&l| rhs.iter().map(move |&r| l.min(r)))
            .collect();
        Ok(Self {
            dimension: lhs.len(),
            cells,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.dimension + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.dimension + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.dimension..(row + 1) * self.dimension]
    }

    /// Whether every cell is zero
    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|c| *c == 0.0)
    }

    /// Cell-wise maximum with `other`, in place
    pub fn max_assign(&mut self, other: &RelationMatrix) -> Result<()> {
        if other.dimension != self.dimension {
            return Err(FtsError::DimensionMismatch {
                expected: self.dimension,
                actual: other.dimension,
            });
        }
        for (cell, value) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell = cell.max(*value);
        }
        Ok(())
    }

    /// Max-min composition of a membership vector with this relation
    ///
    /// `result[j] = max_i min(memberships[i], R[i][j])`
    ///
    /// The relation is read by row because rows hold the antecedent set
    /// observed at `t`. Composing over columns instead would turn a single
    /// learned `A -> B` pair into a forecast of `A`.
    pub fn compose(&self, memberships: &[f64]) -> Result<Vec<f64>> {
        if memberships.len() != self.dimension {
            return Err(FtsError::DimensionMismatch {
                expected: self.dimension,
                actual: memberships.len(),
            });
        }

        let mut result = vec![0.0_f64; self.dimension];
        for (i, &m) in memberships.iter().enumerate() {
            if m <= 0.0 {
                continue;
            }
            for (out, &r) in result.iter_mut().zip(self.row(i)) {
                *out = out.max(m.min(r));
            }
        }
        Ok(result)
    }
}

impl fmt::Display for RelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            let cells: Vec<String> = self.row(row).iter().map(|c| format!("{c:.3}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
