//! Benchmark support crate for percolate.
//!
//! Provides seeded synthetic association networks and parameter types used
//! by the Criterion benchmarks for the step table and snapshot modes.

pub mod error;
pub mod params;
pub mod source;
