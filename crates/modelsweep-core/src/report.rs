//! Run summary output and the terminal report trigger.

use crate::error::Error;
use crate::runner::JobOutcome;
use crate::tester::Reporter;
use serde::Serialize;
use std::path::Path;

/// Invoke the reporter once over the whole scan root. Unlike per-job
/// failures, a reporter failure is not isolated: the batch is already
/// complete, so the error is surfaced to the caller.
pub async fn trigger_report(
    reporter: &dyn Reporter,
    scan_root: &Path,
    output_figure: &str,
) -> Result<(), Error> {
    tracing::info!(
        scan_root = %scan_root.display(),
        output_figure,
        "generating summary report"
    );
    reporter
        .report(scan_root, output_figure)
        .await
        .map_err(Error::Report)
}

/// Machine-readable summary of one sweep.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<JobOutcome>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[JobOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.success).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
            outcomes: outcomes.to_vec(),
        }
    }
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary(summary: &RunSummary, out: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(out, json)?;
    Ok(())
}

/// Print per-failure lines and the pass/fail tally to stderr.
pub fn print_summary(outcomes: &[JobOutcome]) {
    for o in outcomes.iter().filter(|o| !o.success) {
        eprintln!(
            "FAIL {}: {}",
            o.location.display(),
            o.error.as_deref().unwrap_or("unknown error")
        );
    }
    let passed = outcomes.iter().filter(|o| o.success).count();
    eprintln!(
        "Tested {} models: {} passed, {} failed",
        outcomes.len(),
        passed,
        outcomes.len() - passed
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn outcome(name: &str, success: bool) -> JobOutcome {
        JobOutcome {
            location: PathBuf::from(name),
            success,
            error: (!success).then(|| "scripted".to_string()),
            duration_ms: 12,
        }
    }

    #[test]
    fn summary_counts_passed_and_failed() {
        let summary =
            RunSummary::from_outcomes(&[outcome("a", true), outcome("b", false), outcome("c", true)]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn summary_serializes_outcome_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("summary.json");
        let summary = RunSummary::from_outcomes(&[outcome("/models/A", false)]);
        write_summary(&summary, &out).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["total"], 1);
        assert_eq!(v["failed"], 1);
        assert_eq!(v["outcomes"][0]["location"], "/models/A");
        assert_eq!(v["outcomes"][0]["success"], false);
        assert_eq!(v["outcomes"][0]["error"], "scripted");
    }

    #[test]
    fn successful_outcome_omits_error_key() {
        let json = serde_json::to_value(outcome("a", true)).unwrap();
        assert!(json.get("error").is_none());
    }
}
