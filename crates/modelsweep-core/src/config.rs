use crate::error::Error;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// File suffix identifying a packaged model artifact.
pub const ARTIFACT_SUFFIX: &str = ".ell.zip";

/// Default file name of the summary figure produced by the reporter.
pub const OUTPUT_FIGURE: &str = "speed_v_accuracy.png";

/// Suffix appended to an artifact's base name to derive its test directory.
pub const TEST_DIR_SUFFIX: &str = "_pitest";

/// How the batch scheduler drives the job set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// One job at a time, in discovery order.
    Sequential,
    /// All jobs submitted to the worker pool, bounded by `max_in_flight`.
    Parallel,
}

/// Parameters of one sweep invocation. Constructed once at startup, immutable
/// thereafter. External capabilities (tester, reporter) are passed to
/// [`crate::sweep::Sweep`] directly rather than resolved from ambient
/// environment state.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the model search.
    pub root: PathBuf,
    /// Sequential or parallel execution.
    pub mode: ExecMode,
    /// Upper bound on concurrently running jobs in parallel mode.
    pub max_in_flight: usize,
    /// Artifact file suffix to match during discovery.
    pub artifact_suffix: String,
    /// File name passed to the reporter for the summary figure.
    pub output_figure: String,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mode: ExecMode::Parallel,
            max_in_flight: default_parallelism(),
            artifact_suffix: ARTIFACT_SUFFIX.to_string(),
            output_figure: OUTPUT_FIGURE.to_string(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ExecMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }

    #[must_use]
    pub fn with_artifact_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.artifact_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_output_figure(mut self, name: impl Into<String>) -> Self {
        self.output_figure = name.into();
        self
    }

    /// Validate the configuration before any job runs.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.root.is_dir() {
            return Err(Error::InvalidPath {
                path: self.root.clone(),
            });
        }
        Ok(())
    }
}

/// Default worker-pool bound: available CPU parallelism.
pub fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(4)
}
