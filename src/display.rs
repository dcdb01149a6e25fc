use std::collections::HashMap;

use tracing::{debug, warn};

use crate::evaluation::EvaluationResult;
use crate::params::VerbosityParams;
use crate::representation::diagnostic::Diagnostic;

//
//  Prediction report
//

pub fn show_predictions(evaluation: &EvaluationResult) {
    println!("\n<MODEL PREDICTION>\t\t\t\t\t\t<CORRECT PREDICTION>\n");
    for record in &evaluation.records {
        println!(
            "ID {}: {}\t\t\t\tCorrect: {}",
            record.test_id,
            record.predicted,
            record.actual.as_deref().unwrap_or("-")
        );
    }
}

pub fn format_accuracy(accuracy: Option<f64>) -> String {
    match accuracy {
        Some(acc) => format!("{:.0}%", acc),
        None => "undefined (no test genes)".to_string(),
    }
}

pub fn show_final_acc(evaluation: &EvaluationResult) {
    println!("\nAccuracy: {}", format_accuracy(evaluation.accuracy));
    println!(
        "corr {:?}, false {:?}, no_predict {:?}, missing_truth {:?}, total {:?}",
        evaluation.correct,
        evaluation.wrong(),
        evaluation.no_predict,
        evaluation.missing_truth,
        evaluation.total
    );
}

//
//  Diagnostics
//

fn diagnostic_kind(diagnostic: &Diagnostic) -> &'static str {
    match diagnostic {
        Diagnostic::MissingField { .. } => "missing field",
        Diagnostic::DroppedTrainingRow { .. } => "dropped training row",
        Diagnostic::SkippedTestRow { .. } => "skipped test row",
        Diagnostic::DuplicateTestId { .. } => "duplicate test id",
        Diagnostic::UnmatchedAttribute { .. } => "unmatched attribute",
    }
}

/// Logs a per kind summary, and every diagnostic at debug level.
pub fn log_diagnostics(diagnostics: &[Diagnostic]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for diagnostic in diagnostics {
        *counts.entry(diagnostic_kind(diagnostic)).or_insert(0) += 1;
        debug!("{:?}", diagnostic);
    }

    let mut kinds = counts.into_iter().collect::<Vec<_>>();
    kinds.sort();
    for (kind, count) in kinds {
        warn!("{} {} diagnostics", count, kind);
    }
}

pub fn show_run(evaluation: &EvaluationResult, diagnostics: &[Diagnostic], verbosity: &VerbosityParams) {
    if verbosity.show_predictions {
        show_predictions(evaluation);
    }
    if verbosity.show_diagnostics {
        log_diagnostics(diagnostics);
    }
    if verbosity.show_final_acc {
        show_final_acc(evaluation);
    }
}
