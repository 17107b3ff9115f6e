//! Fuzzification options and results

use crate::error::FtsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shape of a fuzzification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzifyMode {
    /// Names of the activated sets
    #[default]
    Sets,
    /// Membership degree for every set, zero where inactive
    Vector,
    /// `(name, membership)` pairs for the activated sets
    Both,
}

/// Which sets count as activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzifyMethod {
    /// Every set whose membership passes the alpha cut
    #[default]
    Fuzzy,
    /// Only the set with the highest membership, first in order on ties
    Maximum,
}

/// Which sets have their membership evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// The `k` nearest sets found through the spatial index
    Nearest(usize),
    /// Every set in the partition
    All,
}

impl Default for SearchScope {
    fn default() -> Self {
        SearchScope::Nearest(3)
    }
}

/// How a fuzzy representation is turned back into a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzifyMode {
    /// Membership-weighted mean of centroids over `(name, membership)` pairs
    #[default]
    Both,
    /// Membership-weighted mean of centroids over a full vector
    Vector,
    /// Unweighted mean of the centroids of the named sets
    Sets,
}

/// Options controlling a fuzzification call
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzifyOptions {
    /// Minimum membership considered significant
    pub alpha_cut: f64,
    pub mode: FuzzifyMode,
    pub method: FuzzifyMethod,
    pub scope: SearchScope,
}

impl FuzzifyOptions {
    /// Full membership vector
    pub fn vector() -> Self {
        Self {
            mode: FuzzifyMode::Vector,
            ..Self::default()
        }
    }

    /// `(name, membership)` pairs
    pub fn both() -> Self {
        Self {
            mode: FuzzifyMode::Both,
            ..Self::default()
        }
    }

    /// Name of the single most activated set
    pub fn maximum() -> Self {
        Self {
            method: FuzzifyMethod::Maximum,
            ..Self::default()
        }
    }

    pub fn with_alpha_cut(mut self, alpha_cut: f64) -> Self {
        self.alpha_cut = alpha_cut;
        self
    }

    pub fn with_neighbors(mut self, k: usize) -> Self {
        self.scope = SearchScope::Nearest(k);
        self
    }

    /// Evaluate every set instead of the nearest candidates
    pub fn exhaustive(mut self) -> Self {
        self.scope = SearchScope::All;
        self
    }
}

/// Result of fuzzifying a single value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fuzzified {
    /// Activated set names, in partition order
    Sets(Vec<String>),
    /// Single most activated set
    Set(String),
    /// Membership of every set, in partition order
    Vector(Vec<f64>),
    /// Activated `(name, membership)` pairs, in partition order
    Both(Vec<(String, f64)>),
}

impl Fuzzified {
    /// Names of the activated sets, regardless of representation
    ///
    /// For [`Fuzzified::Vector`] the names are unknown and this is empty.
    pub fn set_names(&self) -> Vec<&str> {
        match self {
            Fuzzified::Sets(names) => names.iter().map(String::as_str).collect(),
            Fuzzified::Set(name) => vec![name.as_str()],
            Fuzzified::Vector(_) => Vec::new(),
            Fuzzified::Both(pairs) => pairs.iter().map(|(name, _)| name.as_str()).collect(),
        }
    }
}

impl FromStr for FuzzifyMode {
    type Err = FtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sets" => Ok(FuzzifyMode::Sets),
            "vector" => Ok(FuzzifyMode::Vector),
            "both" => Ok(FuzzifyMode::Both),
            other => Err(FtsError::UnknownMode(format!("fuzzification mode '{other}'"))),
        }
    }
}

impl FromStr for FuzzifyMethod {
    type Err = FtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fuzzy" => Ok(FuzzifyMethod::Fuzzy),
            "maximum" => Ok(FuzzifyMethod::Maximum),
            other => Err(FtsError::UnknownMode(format!("fuzzification method '{other}'"))),
        }
    }
}

impl FromStr for DefuzzifyMode {
    type Err = FtsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" => Ok(DefuzzifyMode::Both),
            "vector" => Ok(DefuzzifyMode::Vector),
            "sets" => Ok(DefuzzifyMode::Sets),
            other => Err(FtsError::UnknownMode(format!("defuzzification mode '{other}'"))),
        }
    }
}
