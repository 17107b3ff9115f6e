//! Membership functions
//!
//! A closed set of membership function shapes, each carrying its own
//! parameters. Evaluation is a single exhaustive match.

use super::FuzzySet;
use crate::error::{FtsError, Result};
use serde::{Deserialize, Serialize};

/// Shape and parameters of a fuzzy set's membership function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// Triangle rising on `[a, b]` and falling on `[b, c]`
    Triangular { a: f64, b: f64, c: f64 },
    /// Trapezoid with plateau `[b, c]` and support `[a, d]`
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    /// Gaussian bell `exp(-(x - mean)^2 / (2 sigma^2))`
    Gaussian { mean: f64, sigma: f64 },
    /// Generalized bell `1 / (1 + |(x - center) / width|^(2 slope))`
    Bell { width: f64, slope: f64, center: f64 },
    /// Logistic curve `1 / (1 + exp(-slope (x - center)))`
    Sigmoid { slope: f64, center: f64 },
    /// Crisp point: 1 at `point`, 0 elsewhere
    Singleton { point: f64 },
    /// Union of sub-sets, evaluated as the maximum of their memberships
    Composite { sets: Vec<FuzzySet> },
}

impl MembershipFunction {
    /// Check that the parameters describe a well-formed function
    pub fn validate(&self) -> Result<()> {
        match self {
            MembershipFunction::Triangular { a, b, c } => {
                require_finite(&[*a, *b, *c])?;
                if !(a <= b && b <= c) {
                    return Err(FtsError::invalid_parameter(
                        "triangular",
                        format!("vertices must satisfy a <= b <= c, got [{a}, {b}, {c}]"),
                    ));
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                require_finite(&[*a, *b, *c, *d])?;
                if !(a <= b && b <= c && c <= d) {
                    return Err(FtsError::invalid_parameter(
                        "trapezoidal",
                        format!("vertices must satisfy a <= b <= c <= d, got [{a}, {b}, {c}, {d}]"),
                    ));
                }
            }
            MembershipFunction::Gaussian { mean, sigma } => {
                require_finite(&[*mean, *sigma])?;
                if *sigma <= 0.0 {
                    return Err(FtsError::invalid_parameter("sigma", "must be positive"));
                }
            }
            MembershipFunction::Bell { width, slope, center } => {
                require_finite(&[*width, *slope, *center])?;
                if *width <= 0.0 || *slope <= 0.0 {
                    return Err(FtsError::invalid_parameter(
                        "bell",
                        "width and slope must be positive",
                    ));
                }
            }
            MembershipFunction::Sigmoid { slope, center } => {
                require_finite(&[*slope, *center])?;
                if *slope == 0.0 {
                    return Err(FtsError::invalid_parameter("slope", "must be non-zero"));
                }
            }
            MembershipFunction::Singleton { point } => require_finite(&[*point])?,
            MembershipFunction::Composite { sets } => {
                if sets.is_empty() {
                    return Err(FtsError::invalid_parameter(
                        "composite",
                        "must contain at least one set",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Evaluate the membership degree of `x`, in `[0, 1]`
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }

        let value = match self {
            MembershipFunction::Triangular { a, b, c } => {
                if x == *b {
                    1.0
                } else if x < *a || x > *c {
                    0.0
                } else if x < *b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                if x < *a || x > *d {
                    0.0
                } else if x >= *b && x <= *c {
                    1.0
                } else if x < *b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            }
            MembershipFunction::Gaussian { mean, sigma } => {
                (-(x - mean).powi(2) / (2.0 * sigma * sigma)).exp()
            }
            MembershipFunction::Bell { width, slope, center } => {
                1.0 / (1.0 + ((x - center) / width).abs().powf(2.0 * slope))
            }
            MembershipFunction::Sigmoid { slope, center } => {
                1.0 / (1.0 + (-slope * (x - center)).exp())
            }
            MembershipFunction::Singleton { point } => {
                if x == *point {
                    1.0
                } else {
                    0.0
                }
            }
            MembershipFunction::Composite { sets } => sets
                .iter()
                .map(|set| set.membership(x))
                .fold(0.0, f64::max),
        };

        value.clamp(0.0, 1.0)
    }

    /// Effective support `(lower, upper)` of the function
    pub fn support(&self) -> (f64, f64) {
        match self {
            MembershipFunction::Triangular { a, c, .. } => (*a, *c),
            MembershipFunction::Trapezoidal { a, d, .. } => (*a, *d),
            MembershipFunction::Gaussian { mean, sigma } => (mean - 3.0 * sigma, mean + 3.0 * sigma),
            MembershipFunction::Bell { width, center, .. } => {
                (center - 3.0 * width, center + 3.0 * width)
            }
            MembershipFunction::Sigmoid { slope, center } => {
                let k = 3.0 / slope.abs();
                (center - k, center + k)
            }
            MembershipFunction::Singleton { point } => (*point, *point),
            MembershipFunction::Composite { sets } => sets.iter().fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lower, upper), set| (lower.min(set.lower()), upper.max(set.upper())),
            ),
        }
    }

    /// Representative point of the function
    pub fn centroid(&self) -> f64 {
        match self {
            MembershipFunction::Triangular { b, .. } => *b,
            MembershipFunction::Trapezoidal { b, c, .. } => (b + c) / 2.0,
            MembershipFunction::Gaussian { mean, .. } => *mean,
            MembershipFunction::Bell { center, .. } => *center,
            MembershipFunction::Sigmoid { center, .. } => *center,
            MembershipFunction::Singleton { point } => *point,
            MembershipFunction::Composite { .. } => {
                let (lower, upper) = self.support();
                lower + (upper - lower) / 2.0
            }
        }
    }

    /// Short identifier of the function shape
    pub fn kind_name(&self) -> &'static str {
        match self {
            MembershipFunction::Triangular { .. } => "triangular",
            MembershipFunction::Trapezoidal { .. } => "trapezoidal",
            MembershipFunction::Gaussian { .. } => "gaussian",
            MembershipFunction::Bell { .. } => "bell",
            MembershipFunction::Sigmoid { .. } => "sigmoid",
            MembershipFunction::Singleton { .. } => "singleton",
            MembershipFunction::Composite { .. } => "composite",
        }
    }
}

fn require_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FtsError::invalid_parameter(
            "membership",
            "parameters must be finite",
        ))
    }
}
