//! Single-job execution with failure isolation.

use crate::config::TEST_DIR_SUFFIX;
use crate::tester::{JobSpec, ModelTester};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Recorded result of testing one artifact. Always produced, never raised:
/// the outcome type is the only channel for per-job failures.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    /// Directory holding the tested artifact.
    pub location: PathBuf,
    pub success: bool,
    /// Captured error description when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl JobOutcome {
    pub(crate) fn failed(location: PathBuf, error: String, duration_ms: u64) -> Self {
        Self {
            location,
            success: false,
            error: Some(error),
            duration_ms,
        }
    }
}

/// Derive the job-exclusive output directory name from the artifact
/// directory's base name. Distinct artifact directories under one root yield
/// distinct names, so concurrent jobs never collide on output paths.
pub fn test_dir_name(location: &Path) -> String {
    let base = location
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{base}{TEST_DIR_SUFFIX}")
}

/// Run the tester against one artifact location.
///
/// This is the isolation boundary: any tester failure is caught here, logged
/// with the artifact it belongs to, and folded into a failed outcome. One bad
/// model must never abort the batch.
pub async fn run_one(tester: &dyn ModelTester, location: PathBuf) -> JobOutcome {
    let job = JobSpec {
        test_dir: test_dir_name(&location),
        path: location.clone(),
    };
    let start = Instant::now();
    match tester.test(&job).await {
        Ok(()) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            tracing::info!(
                model = %location.display(),
                duration_ms,
                "model test passed"
            );
            JobOutcome {
                location,
                success: true,
                error: None,
                duration_ms,
            }
        }
        Err(e) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            let message = format!("{e:#}");
            tracing::error!(
                model = %location.display(),
                error = %message,
                "model test failed"
            );
            JobOutcome::failed(location, message, duration_ms)
        }
    }
}
