//! Batch validation engine for packaged model artifacts.
//!
//! Discovers model artifacts under a directory tree, runs an external tester
//! against each one with per-job failure isolation, sequentially or on a
//! bounded worker pool, and finally triggers an external reporter over the
//! same tree to produce a summary figure.

pub mod config;
pub mod error;
pub mod locate;
pub mod report;
pub mod runner;
pub mod schedule;
pub mod sweep;
pub mod tester;

pub use config::{ExecMode, RunConfig};
pub use error::Error;
pub use runner::JobOutcome;
pub use sweep::Sweep;
pub use tester::{CommandReporter, CommandTester, JobSpec, ModelTester, Reporter};
