use std::path::PathBuf;

/// Fatal errors for a sweep.
///
/// Per-job failures never show up here: they are folded into
/// [`crate::runner::JobOutcome`] and the batch keeps going. Only configuration
/// problems (before any job runs) and reporter failures (after all jobs have
/// completed) terminate a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search root does not exist or is not a directory.
    #[error("not a directory: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// The reporter capability failed while producing the summary figure.
    #[error("report generation failed")]
    Report(#[source] anyhow::Error),
}
