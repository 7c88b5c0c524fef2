//! Orchestration of one full sweep: validate, locate, schedule, report.

use crate::config::{ExecMode, RunConfig};
use crate::error::Error;
use crate::locate::locate;
use crate::report::{print_summary, trigger_report};
use crate::runner::JobOutcome;
use crate::schedule::run_all;
use crate::tester::{ModelTester, Reporter};
use std::sync::Arc;

/// One batch run over a directory tree of packaged models.
///
/// The tester and reporter capabilities are supplied at construction; nothing
/// is resolved from process environment state.
pub struct Sweep {
    config: RunConfig,
    tester: Arc<dyn ModelTester>,
    reporter: Arc<dyn Reporter>,
}

impl Sweep {
    pub fn new(config: RunConfig, tester: Arc<dyn ModelTester>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            config,
            tester,
            reporter,
        }
    }

    /// Run the sweep to completion and return every job outcome.
    ///
    /// Only configuration and reporter errors surface as `Err`; individual
    /// job failures are recorded in the returned outcomes. The report is
    /// attempted even when every job failed.
    pub async fn run(&self) -> Result<Vec<JobOutcome>, Error> {
        self.config.validate()?;

        let locations = locate(&self.config.root, &self.config.artifact_suffix)?;
        tracing::info!(
            root = %self.config.root.display(),
            count = locations.len(),
            "discovered model artifacts"
        );

        match self.config.mode {
            ExecMode::Parallel => tracing::info!("Running in parallel"),
            ExecMode::Sequential => tracing::info!("Running sequentially"),
        }

        let outcomes = run_all(
            self.tester.clone(),
            locations,
            self.config.mode,
            self.config.max_in_flight,
        )
        .await;

        print_summary(&outcomes);

        trigger_report(
            self.reporter.as_ref(),
            &self.config.root,
            &self.config.output_figure,
        )
        .await?;

        Ok(outcomes)
    }
}
