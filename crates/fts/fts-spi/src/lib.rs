//! Fuzzy Time Series Service Provider Interface
//!
//! Defines the contracts, shared data model and error type for fuzzy time
//! series forecasting.
//!
//! - [`Partitioning`]: strategy that splits a universe of discourse into fuzzy sets
//! - [`Transformation`]: reversible data transformation applied around a model
//! - [`Forecaster`]: train/forecast interface for fuzzy time series models
//! - [`FuzzySet`] and [`MembershipFunction`]: the linguistic terms themselves
//! - [`FtsError`]: standardized error type for all operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Forecaster, Partition, Partitioning, Transformation};
pub use error::{FtsError, Result};
pub use model::{
    DefuzzifyMode, FuzzifyMethod, FuzzifyMode, FuzzifyOptions, Fuzzified, FuzzySet,
    MembershipFunction, MembershipKind, PartitionerConfig, SearchScope, Universe,
};
