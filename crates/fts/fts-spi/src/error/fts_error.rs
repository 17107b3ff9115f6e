//! Fuzzy time series error types
//!
//! Defines the standardized error type for all partitioning, fuzzification
//! and forecasting operations.

use thiserror::Error;

/// Result type alias for fuzzy time series operations
pub type Result<T> = std::result::Result<T, FtsError>;

/// Errors that can occur during fuzzy time series operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FtsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Invalid time series data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Unrecognized fuzzification or defuzzification mode
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// Fuzzy set index outside the partition
    #[error("Fuzzy set index {index} out of range: partition has {len} sets")]
    IndexOutOfRange { index: usize, len: usize },

    /// Fuzzy set name not present in the partition
    #[error("Unknown fuzzy set: {0}")]
    UnknownSet(String),

    /// Weighted defuzzification with all-zero weights
    #[error("Membership weights sum to zero")]
    ZeroWeight,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Two structures that must agree in size do not
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Model has not been trained yet
    #[error("Model must be trained before forecasting")]
    NotTrained,

    /// Saving or loading a model failed
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl FtsError {
    /// Shorthand for [`FtsError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        FtsError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
