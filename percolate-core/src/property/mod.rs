//! Property-based tests for the percolation engine.
//!
//! Checks the step table and snapshot partitions against a breadth-first
//! search oracle over randomly generated edge streams, and verifies the
//! structural invariants of the step sequence: monotone counters, size
//! conservation, inert self loops and duplicate edges, and agreement between
//! the two maximum-tracking strategies.

mod oracle;
mod strategies;
