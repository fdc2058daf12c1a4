//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-kind pseudo-legal generation
//! - `probe.rs` - Probe/undo correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
