//! Support library for the spanwood CLI binary.
//!
//! Exposes the command pipeline, graph file loaders and logging setup so
//! doctests and integration tests can exercise them without forking a
//! subprocess.

pub mod cli;
pub mod loader;
pub mod logging;
