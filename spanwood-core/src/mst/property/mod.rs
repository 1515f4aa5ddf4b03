//! Property-based tests for the exact spanning-forest engines.
//!
//! Checks all four engines against a sequential Kruskal oracle, validates
//! the structural invariants of every forest (acyclicity, `V − c` edges,
//! canonical form) and asserts that repeated and concurrent runs are
//! bit-identical, across graph topologies with varied weight distributions.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
