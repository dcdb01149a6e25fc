use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::dataset_readers::{read_test_table, read_training_table};
use crate::display::{format_accuracy, log_diagnostics};
use crate::experiments::{holdout_test, n_fold_test};
use crate::params::{params_from_args, RunMode, VerbosityParams};
use crate::result_export::{write_results, write_summary, RunSummary};

mod classifier;
mod dataset_readers;
mod display;
mod error;
mod evaluation;
mod experiments;
mod neighborhood;
mod params;
mod prediction;
mod representation;
mod result_export;
mod scoring;
mod selection;
mod util;


fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let params = params_from_args(&args).context("invalid configuration")?;

    info!(
        "Starting gene localization classifier: mode={} k={} selection={} voting={}",
        params.mode, params.k, params.selection_policy, params.voting_strategy
    );

    let (training, training_diagnostics) =
        read_training_table(&params).context("loading training table")?;
    log_diagnostics(&training_diagnostics);

    match params.mode {
        RunMode::Holdout => {
            let (test, test_diagnostics) =
                read_test_table(&params).context("loading test table")?;
            log_diagnostics(&test_diagnostics);

            let run = holdout_test(&params, &training, &test, &VerbosityParams::holdout_defaults())
                .context("classification failed")?;
            log_diagnostics(run.diagnostics());

            write_results(&params.output_path, &run.evaluation)?;
            if let Some(summary_path) = &params.summary_path {
                write_summary(summary_path, &RunSummary::new(&params, &run))?;
            }
        }
        RunMode::CrossValidate => {
            let report = n_fold_test(&params, &training, &VerbosityParams::n_fold_defaults())
                .context("cross validation failed")?;
            println!(
                "test_acc: {} std {}",
                format_accuracy(report.mean),
                report
                    .std_dev
                    .map(|std| format!("{:.4}", std))
                    .unwrap_or_else(|| "-".to_string())
            );
            if let Some(summary_path) = &params.summary_path {
                write_summary(summary_path, &report)?;
            }
        }
    }

    Ok(())
}
