use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;
use tracing::info;

use crate::classifier::ClassificationRun;
use crate::error::{KnnError, Result};
use crate::evaluation::EvaluationResult;
use crate::params::Params;
use crate::prediction::VotingStrategy;
use crate::selection::SelectionPolicy;

pub const RESULTS_HEADER: &str = "<GENE ID>  <LOCALIZATION>";

fn io_err(path: &str) -> impl Fn(std::io::Error) -> KnnError + '_ {
    move |source| KnnError::Io {
        path: path.to_string(),
        source,
    }
}

/// Writes the header line followed by one `id | label` line per prediction.
pub fn write_results(path: &str, evaluation: &EvaluationResult) -> Result<()> {
    let f = File::create(path).map_err(io_err(path))?;
    let mut writer = BufWriter::new(f);

    writeln!(writer, "{}", RESULTS_HEADER).map_err(io_err(path))?;
    for line in &evaluation.report_lines {
        writeln!(writer, "{}", line).map_err(io_err(path))?;
    }
    writer.flush().map_err(io_err(path))?;

    info!("Wrote {} predictions to {}", evaluation.report_lines.len(), path);
    Ok(())
}

#[derive(Clone, Debug, Serialize)]
pub struct RunSummary<'a> {
    pub k: usize,
    pub selection_policy: SelectionPolicy,
    pub voting_strategy: VotingStrategy,
    pub diagnostics: usize,
    pub evaluation: &'a EvaluationResult,
}

impl<'a> RunSummary<'a> {
    pub fn new(params: &Params, run: &'a ClassificationRun) -> RunSummary<'a> {
        return RunSummary {
            k: params.k,
            selection_policy: params.selection_policy,
            voting_strategy: params.voting_strategy,
            diagnostics: run.diagnostics().len(),
            evaluation: &run.evaluation,
        };
    }
}

/// Writes any serializable run summary as pretty printed JSON.
pub fn write_summary<T: Serialize>(path: &str, summary: &T) -> Result<()> {
    let f = File::create(path).map_err(io_err(path))?;
    let mut writer = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush().map_err(io_err(path))?;
    info!("Wrote run summary to {}", path);
    Ok(())
}
