//! # testloom_kit
//!
//! Shared toolbox for the testloom crates: compact strings, fast hash
//! collections, and the naming-convention helpers the analyzer and the
//! scaffold emitter both need.

pub mod case;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export phf for compile-time perfect hash sets
pub use phf::{phf_set, Set as PhfSet};

pub use case::*;
