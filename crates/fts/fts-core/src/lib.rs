//! FTS Core
//!
//! **WARNING: This is an internal crate. Do not depend on it directly.**
//! **Use `fts-facade` instead for a stable public API.**
//!
//! Fuzzy time series implementation: partitioning strategies, the
//! partitioner with its spatial set index, transition extraction and the
//! Song & Chissom relational model.

pub mod batch;
pub mod flr;
pub mod index;
pub mod metrics;
pub mod partitioner;
pub mod partitioning;
pub mod persistence;
pub mod relation;
pub mod song;
pub mod transformation;

// Re-export SPI types
pub use fts_spi::{
    DefuzzifyMode, Forecaster, FtsError, FuzzifyMethod, FuzzifyMode, FuzzifyOptions, Fuzzified,
    FuzzySet, MembershipFunction, MembershipKind, Partition, PartitionerConfig, Partitioning,
    Result, SearchScope, Transformation, Universe,
};

pub use batch::{BatchConfig, BatchFailure, BatchReport, BatchTrainer};
pub use flr::{Flr, RecurrencePolicy};
pub use partitioner::Partitioner;
pub use partitioning::{CMeansPartitioning, EqualFrequencyPartitioning, GridPartitioning};
pub use relation::RelationMatrix;
pub use song::ConventionalFts;
pub use transformation::{Differential, Scale, TransformationStep};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::batch::{BatchConfig, BatchTrainer};
    pub use crate::partitioner::Partitioner;
    pub use crate::partitioning::{CMeansPartitioning, EqualFrequencyPartitioning, GridPartitioning};
    pub use crate::song::ConventionalFts;
    pub use crate::transformation::{Differential, Scale};
    pub use fts_spi::{
        DefuzzifyMode, Forecaster, FtsError, FuzzifyOptions, Fuzzified, FuzzySet, PartitionerConfig,
        Result, SearchScope,
    };
}
