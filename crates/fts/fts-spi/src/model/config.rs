//! Partitioner configuration

use crate::error::{FtsError, Result};
use serde::{Deserialize, Serialize};

/// Membership shape generated by grid partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipKind {
    #[default]
    Triangular,
    Trapezoidal,
    Gaussian,
}

/// Configuration shared by all partitioning strategies
///
/// # Example
///
/// ```rust
/// use fts_spi::PartitionerConfig;
///
/// let config = PartitionerConfig::from_json(r#"{ "partitions": 7, "upper_margin": 0.2 }"#).unwrap();
/// assert_eq!(config.partitions, 7);
/// assert_eq!(config.lower_margin(), 0.1);
/// assert_eq!(config.upper_margin(), 0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerConfig {
    /// Number of fuzzy sets to create
    pub partitions: usize,
    /// Default margin for both universe bounds
    pub margin: f64,
    /// Margin for the lower bound, overriding `margin`
    pub lower_margin: Option<f64>,
    /// Margin for the upper bound, overriding `margin`
    pub upper_margin: Option<f64>,
    /// Prefix of auto-generated set names
    pub prefix: String,
    /// Explicit set names, used in place of `prefix + index`
    pub names: Option<Vec<String>>,
    /// Membership shape for strategies that support a choice
    pub membership: MembershipKind,
    /// Number of nearest sets examined during fuzzification
    pub neighbors: usize,
}

impl Default for PartitionerConfig {
    fn default() -> Self {
        Self {
            partitions: 10,
            margin: 0.1,
            lower_margin: None,
            upper_margin: None,
            prefix: "A".to_string(),
            names: None,
            membership: MembershipKind::Triangular,
            neighbors: 3,
        }
    }
}

impl PartitionerConfig {
    /// Configuration with `partitions` sets and defaults elsewhere
    pub fn with_partitions(partitions: usize) -> Self {
        Self {
            partitions,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FtsError::invalid_parameter("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn lower_margin(&self) -> f64 {
        self.lower_margin.unwrap_or(self.margin)
    }

    pub fn upper_margin(&self) -> f64 {
        self.upper_margin.unwrap_or(self.margin)
    }

    /// Name of the set at position `index`
    pub fn set_name(&self, index: usize) -> String {
        match &self.names {
            Some(names) if index < names.len() => names[index].clone(),
            _ => format!("{}{}", self.prefix, index),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.partitions < 1 {
            return Err(FtsError::invalid_parameter("partitions", "must be at least 1"));
        }
        if self.neighbors < 1 {
            return Err(FtsError::invalid_parameter("neighbors", "must be at least 1"));
        }
        for (name, margin) in [
            ("lower_margin", self.lower_margin()),
            ("upper_margin", self.upper_margin()),
        ] {
            if !margin.is_finite() || margin < 0.0 {
                return Err(FtsError::invalid_parameter(
                    name,
                    "must be a finite, non-negative number",
                ));
            }
        }
        if let Some(names) = &self.names {
            if names.len() < self.partitions {
                return Err(FtsError::invalid_parameter(
                    "names",
                    format!(
                        "{} names given for {} partitions",
                        names.len(),
                        self.partitions
                    ),
                ));
            }
        }
        Ok(())
    }
}
