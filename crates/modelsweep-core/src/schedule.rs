//! Batch scheduling over the discovered artifact set.

use crate::config::ExecMode;
use crate::runner::{run_one, JobOutcome};
use crate::tester::ModelTester;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Drive the tester over every location, one attempt each, and return one
/// outcome per location. A failing job never halts dispatch of the rest; the
/// only guarantee on the returned collection is completeness, not order.
///
/// The location set is fixed at call time: nothing is added or removed
/// mid-run.
pub async fn run_all(
    tester: Arc<dyn ModelTester>,
    locations: Vec<PathBuf>,
    mode: ExecMode,
    max_in_flight: usize,
) -> Vec<JobOutcome> {
    match mode {
        ExecMode::Sequential => run_sequential(tester, locations).await,
        ExecMode::Parallel => run_parallel(tester, locations, max_in_flight).await,
    }
}

/// One job at a time. Each job still runs as its own task so that a panic
/// inside the tester is contained the same way as in parallel mode.
async fn run_sequential(tester: Arc<dyn ModelTester>, locations: Vec<PathBuf>) -> Vec<JobOutcome> {
    let total = locations.len();
    let mut outcomes = Vec::with_capacity(total);
    for location in locations {
        let tester = tester.clone();
        let task_location = location.clone();
        let handle = tokio::spawn(async move { run_one(tester.as_ref(), task_location).await });
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(join_err) => {
                tracing::error!(
                    model = %location.display(),
                    error = %join_err,
                    "job task aborted"
                );
                JobOutcome::failed(location, format!("task error: {join_err}"), 0)
            }
        };
        outcomes.push(outcome);
        tracing::info!(done = outcomes.len(), total, "job completed");
    }
    outcomes
}

/// Every job is an independent unit of work on the shared worker pool, with
/// in-flight count bounded by a semaphore. The barrier at the end does not
/// release until every submitted job has completed, successfully or not.
async fn run_parallel(
    tester: Arc<dyn ModelTester>,
    locations: Vec<PathBuf>,
    max_in_flight: usize,
) -> Vec<JobOutcome> {
    let total = locations.len();
    let sem = Arc::new(Semaphore::new(max_in_flight.max(1)));
    let mut join_set = JoinSet::new();
    let mut pending: HashMap<tokio::task::Id, PathBuf> = HashMap::new();

    for location in locations {
        let sem = sem.clone();
        let tester = tester.clone();
        let task_location = location.clone();
        // The permit is taken inside the task: submission never blocks, and
        // the caller suspends only at the completion barrier below.
        let handle = join_set.spawn(async move {
            let _permit = sem.acquire_owned().await.expect("job semaphore closed");
            run_one(tester.as_ref(), task_location).await
        });
        pending.insert(handle.id(), location);
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(res) = join_set.join_next_with_id().await {
        let outcome = match res {
            Ok((id, outcome)) => {
                pending.remove(&id);
                outcome
            }
            // A panicked or cancelled task still yields a failed outcome for
            // its location, keeping the one-outcome-per-artifact invariant.
            Err(join_err) => {
                let location = pending.remove(&join_err.id()).unwrap_or_default();
                tracing::error!(
                    model = %location.display(),
                    error = %join_err,
                    "job task aborted"
                );
                JobOutcome::failed(location, format!("task error: {join_err}"), 0)
            }
        };
        outcomes.push(outcome);
        tracing::info!(done = outcomes.len(), total, "job completed");
    }
    outcomes
}
