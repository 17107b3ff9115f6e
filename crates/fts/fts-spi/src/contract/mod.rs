//! Contract traits for fuzzy time series components
//!
//! - [`Partitioning`]: builds fuzzy sets over a universe of discourse
//! - [`Transformation`]: reversible data transformation
//! - [`Forecaster`]: train/forecast interface for models

mod forecaster;
mod partitioning;
mod transformation;

pub use forecaster::Forecaster;
pub use partitioning::{Partition, Partitioning};
pub use transformation::Transformation;
