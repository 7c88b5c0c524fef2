//! Unified exit codes for the modelsweep CLI.
//! Job failures are logged, never fatal: a run with failing models still
//! exits SUCCESS.

pub const SUCCESS: i32 = 0;
pub const CONFIG_ERROR: i32 = 2; // Invalid root path or bad invocation
pub const REPORT_ERROR: i32 = 3; // Summary report generation failed
