//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts through the adaptor
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Special positions and move classification
//! - `proptest.rs` - Property-based tests

mod perft;
