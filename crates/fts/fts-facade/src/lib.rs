//! FTS Facade
//!
//! High-level API for fuzzy time series forecasting. Re-exports all public
//! types from the fts stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fts_facade::prelude::*;
//!
//! let data: Vec<f64> = (0..100).map(|i| 20.0 + 5.0 * (i as f64 * 0.2).sin()).collect();
//! let partitioner = Partitioner::new(&GridPartitioning, &data, PartitionerConfig::with_partitions(10)).unwrap();
//!
//! let mut model = ConventionalFts::new(Arc::new(partitioner));
//! model.train(&data[..80]).unwrap();
//! let forecast = model.forecast(&data[80..]).unwrap();
//! assert_eq!(forecast.len(), 20);
//! ```

// Re-export everything from core (includes implementations)
pub use fts_core::*;

// Explicit re-exports for documentation
pub use fts_core::prelude;
pub use fts_core::{metrics, persistence};
