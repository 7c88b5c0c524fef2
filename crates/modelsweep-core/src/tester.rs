//! External capabilities: the per-model tester and the summary reporter.
//!
//! The batch engine never interprets what either capability does; it only
//! hands them their configuration and observes success or failure. Subprocess
//! implementations are provided for the common case where both are standalone
//! executables.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Configuration handed to the tester for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    /// Directory holding the packaged model.
    pub path: PathBuf,
    /// Name of the job-exclusive output directory, derived from the
    /// artifact's base name so concurrent jobs never collide.
    pub test_dir: String,
}

/// Validates/benchmarks one packaged model. Runs to completion or errors;
/// writes its own results under the job's test directory.
#[async_trait]
pub trait ModelTester: Send + Sync {
    async fn test(&self, job: &JobSpec) -> anyhow::Result<()>;
}

/// Produces the summary figure correlating accuracy and speed across all
/// models found under `scan_root`. Invoked once per sweep, after the batch.
#[async_trait]
pub trait Reporter: Send + Sync {
    async fn report(&self, scan_root: &Path, output_figure: &str) -> anyhow::Result<()>;
}

/// Tester backed by an external executable, invoked as
/// `<program> --path <dir> --test_dir <name>`.
#[derive(Debug, Clone)]
pub struct CommandTester {
    program: PathBuf,
}

impl CommandTester {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ModelTester for CommandTester {
    async fn test(&self, job: &JobSpec) -> anyhow::Result<()> {
        run_capability(
            &self.program,
            &[
                "--path".as_ref(),
                job.path.as_os_str(),
                "--test_dir".as_ref(),
                job.test_dir.as_ref(),
            ],
        )
        .await
    }
}

/// Reporter backed by an external executable, invoked as
/// `<program> <scan_root> --output_figure <file>`.
#[derive(Debug, Clone)]
pub struct CommandReporter {
    program: PathBuf,
}

impl CommandReporter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl Reporter for CommandReporter {
    async fn report(&self, scan_root: &Path, output_figure: &str) -> anyhow::Result<()> {
        run_capability(
            &self.program,
            &[
                scan_root.as_os_str(),
                "--output_figure".as_ref(),
                output_figure.as_ref(),
            ],
        )
        .await
    }
}

/// Spawn a capability executable and wait for it. Non-zero exit becomes an
/// error carrying the exit code and captured stderr.
async fn run_capability(program: &Path, args: &[&std::ffi::OsStr]) -> anyhow::Result<()> {
    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| anyhow::anyhow!("failed to spawn {}: {}", program.display(), e))?
        .wait_with_output()
        .await?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "{} exited with code {}: {}",
            program.display(),
            code,
            stderr.trim()
        );
    }
    Ok(())
}
