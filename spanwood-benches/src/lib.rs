//! Benchmark support crate for spanwood.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks for the spanning forest and min-cut engines.

pub mod error;
pub mod params;
pub mod source;
