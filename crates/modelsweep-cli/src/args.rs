use clap::{Parser, ValueEnum};
use modelsweep_core::config::{self, ExecMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "modelsweep",
    version,
    about = "Test all packaged models found under a path, sequentially or in parallel, then plot speed vs accuracy"
)]
pub struct Cli {
    /// Model search path
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Execution mode
    #[arg(long, value_enum, default_value_t = ModeArg::Parallel)]
    pub mode: ModeArg,

    /// Maximum number of jobs in flight in parallel mode (default: CPU count)
    #[arg(long)]
    pub jobs: Option<usize>,

    /// Tester executable, invoked per model with --path and --test_dir
    #[arg(long)]
    pub tester: PathBuf,

    /// Reporter executable, invoked once after the batch with the search path
    /// and --output_figure
    #[arg(long)]
    pub reporter: PathBuf,

    /// Artifact file suffix to search for
    #[arg(long, default_value = config::ARTIFACT_SUFFIX)]
    pub suffix: String,

    /// File name of the summary figure passed to the reporter
    #[arg(long, default_value = config::OUTPUT_FIGURE)]
    pub output_figure: String,

    /// Write a machine-readable run summary to this file
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Sequential,
    Parallel,
}

impl From<ModeArg> for ExecMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecMode::Sequential,
            ModeArg::Parallel => ExecMode::Parallel,
        }
    }
}
