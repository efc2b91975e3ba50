//! Shared test utilities used across percolate crates.

pub mod proptest_profile;
pub mod tracing;
