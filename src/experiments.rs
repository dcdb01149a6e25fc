use serde::Serialize;
use statrs::statistics::Statistics;
use tracing::{info, warn};

use crate::classifier::{ClassificationRun, KnnClassifier};
use crate::display::{format_accuracy, show_run};
use crate::error::{KnnError, Result};
use crate::params::{Params, VerbosityParams};
use crate::representation::gene::{TestGene, TrainingGene};
use crate::util::split_train_test_n_fold;

#[derive(Clone, Debug, Serialize)]
pub struct FoldReport {
    /// `None` for a fold with nothing to evaluate.
    pub fold_accuracies: Vec<Option<f64>>,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

/// Classifies the test table against the training table.
pub fn holdout_test(
    params: &Params,
    training: &[TrainingGene],
    test: &[TestGene],
    verbosity: &VerbosityParams,
) -> Result<ClassificationRun> {
    let classifier = KnnClassifier::from_params(params)?;
    let run = classifier.classify(training, test)?;
    show_run(&run.evaluation, run.diagnostics(), verbosity);
    return Ok(run);
}

/// Stratified n-fold validation inside the training table.
pub fn n_fold_test(
    params: &Params,
    genes: &[TrainingGene],
    verbosity: &VerbosityParams,
) -> Result<FoldReport> {
    if genes.is_empty() {
        return Err(KnnError::EmptyTrainingTable);
    }
    let classifier = KnnClassifier::from_params(params)?;
    let folds = split_train_test_n_fold(genes, params.n_folds, params.seed);

    let mut fold_accuracies = Vec::with_capacity(folds.len());
    for (n, (train, test)) in folds.iter().enumerate() {
        if train.is_empty() {
            warn!("fold {} has no training genes, skipping", n);
            fold_accuracies.push(None);
            continue;
        }
        let test_genes = test.iter().map(TrainingGene::as_test_gene).collect::<Vec<_>>();
        let run = classifier.classify(train, &test_genes)?;
        show_run(&run.evaluation, run.diagnostics(), verbosity);

        info!(
            "on fold {:<2?} the test accuracy was: {}",
            n,
            format_accuracy(run.evaluation.accuracy)
        );
        fold_accuracies.push(run.evaluation.accuracy);
    }

    let defined = fold_accuracies.iter().flatten().copied().collect::<Vec<f64>>();
    let (mean, std_dev) = match defined.len() {
        0 => (None, None),
        1 => (Some(defined[0]), None),
        _ => (Some(defined.iter().mean()), Some(defined.iter().std_dev())),
    };

    return Ok(FoldReport {
        fold_accuracies,
        mean,
        std_dev,
    });
}
