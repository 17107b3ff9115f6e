//! Shared data model
//!
//! Fuzzy sets, membership functions, the universe of discourse and the
//! option/result types exchanged between partitioners and models.

mod config;
mod fuzzify;
mod fuzzy_set;
mod membership;
mod universe;

pub use config::{MembershipKind, PartitionerConfig};
pub use fuzzify::{DefuzzifyMode, FuzzifyMethod, FuzzifyMode, FuzzifyOptions, Fuzzified, SearchScope};
pub use fuzzy_set::FuzzySet;
pub use membership::MembershipFunction;
pub use universe::Universe;
