//! Command-line interface orchestration for spanwood.
//!
//! The CLI offers a single `run` command that loads a graph file, runs the
//! requested engines through [`spanwood_core::run`] and reports one timed
//! row per engine.

mod commands;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli,
};
