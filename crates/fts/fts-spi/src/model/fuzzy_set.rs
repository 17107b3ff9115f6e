//! Fuzzy sets (linguistic terms)

use super::MembershipFunction;
use crate::error::{FtsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named membership function over the real line
///
/// The representative point and support are derived from the membership
/// function once, at construction, and satisfy `lower <= centroid <= upper`.
///
/// # Example
///
/// ```rust
/// use fts_spi::{FuzzySet, MembershipFunction};
///
/// let set = FuzzySet::new("A0", MembershipFunction::Triangular { a: 0.0, b: 1.0, c: 2.0 }).unwrap();
/// assert_eq!(set.centroid(), 1.0);
/// assert_eq!(set.membership(1.5), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFuzzySet")]
pub struct FuzzySet {
    name: String,
    function: MembershipFunction,
    centroid: f64,
    lower: f64,
    upper: f64,
}

/// Serialized form; the derived bounds are recomputed on load
#[derive(Deserialize)]
struct RawFuzzySet {
    name: String,
    function: MembershipFunction,
}

impl TryFrom<RawFuzzySet> for FuzzySet {
    type Error = FtsError;

    fn try_from(raw: RawFuzzySet) -> Result<Self> {
        Self::new(raw.name, raw.function)
    }
}

impl FuzzySet {
    /// Create a fuzzy set, validating the membership function parameters
    pub fn new(name: impl Into<String>, function: MembershipFunction) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FtsError::invalid_parameter("name", "must not be empty"));
        }
        function.validate()?;

        let (lower, upper) = function.support();
        let centroid = function.centroid();

        Ok(Self {
            name,
            function,
            centroid,
            lower,
            upper,
        })
    }

    /// Shorthand for a triangular set
    pub fn triangular(name: impl Into<String>, a: f64, b: f64, c: f64) -> Result<Self> {
        Self::new(name, MembershipFunction::Triangular { a, b, c })
    }

    /// Membership degree of `x` in this set
    pub fn membership(&self, x: f64) -> f64 {
        self.function.evaluate(x)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &MembershipFunction {
        &self.function
    }

    pub fn centroid(&self) -> f64 {
        self.centroid
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether `x` lies within the effective support
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }
}

impl fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}({}, {}, {})",
            self.name,
            self.function.kind_name(),
            self.lower,
            self.centroid,
            self.upper
        )
    }
}
