use clap::Parser;
use modelsweep_core::report::{write_summary, RunSummary};
use modelsweep_core::{CommandReporter, CommandTester, Error, RunConfig, Sweep};
use std::sync::Arc;

mod args;
mod exit_codes;

use args::Cli;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = run(cli).await;
    std::process::exit(code);
}

async fn run(cli: Cli) -> i32 {
    let mut config = RunConfig::new(cli.path)
        .with_mode(cli.mode.into())
        .with_artifact_suffix(cli.suffix)
        .with_output_figure(cli.output_figure);
    if let Some(jobs) = cli.jobs {
        config = config.with_max_in_flight(jobs);
    }

    let sweep = Sweep::new(
        config,
        Arc::new(CommandTester::new(cli.tester)),
        Arc::new(CommandReporter::new(cli.reporter)),
    );

    match sweep.run().await {
        Ok(outcomes) => {
            if let Some(path) = cli.summary_json {
                let summary = RunSummary::from_outcomes(&outcomes);
                if let Err(e) = write_summary(&summary, &path) {
                    eprintln!("failed to write {}: {e:#}", path.display());
                    return exit_codes::REPORT_ERROR;
                }
            }
            exit_codes::SUCCESS
        }
        Err(e @ Error::InvalidPath { .. }) => {
            eprintln!("fatal: {e}");
            exit_codes::CONFIG_ERROR
        }
        Err(Error::Report(source)) => {
            eprintln!("fatal: report generation failed: {source:#}");
            exit_codes::REPORT_ERROR
        }
    }
}
