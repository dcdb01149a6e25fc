use tracing::{debug, info, warn};

use crate::error::{KnnError, Result};
use crate::evaluation::{evaluate, EvaluationResult, GroundTruth};
use crate::neighborhood::Neighborhood;
use crate::params::Params;
use crate::prediction::{aggregate, LabelLookup, Prediction, Predictions, VotingStrategy};
use crate::representation::diagnostic::Diagnostic;
use crate::representation::gene::{TestGene, TrainingGene};
use crate::selection::{select_top_k, SelectionPolicy};

/// Test id to the selected training ids, in test table order.
#[derive(Clone, Debug, Default)]
pub struct NeighborSelection {
    entries: Vec<(String, Vec<String>)>,
}

impl NeighborSelection {
    pub fn get(&self, test_id: &str) -> Option<&[String]> {
        return self
            .entries
            .iter()
            .find(|(id, _)| id == test_id)
            .map(|(_, selected)| selected.as_slice());
    }
}

/// Everything produced by one classification run.
#[derive(Clone, Debug)]
pub struct ClassificationRun {
    pub neighborhood: Neighborhood,
    pub selection: NeighborSelection,
    pub predictions: Predictions,
    pub evaluation: EvaluationResult,
}

impl ClassificationRun {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        return &self.neighborhood.diagnostics;
    }
}

#[derive(Clone, Debug)]
pub struct KnnClassifier {
    pub k: usize,
    pub selection_policy: SelectionPolicy,
    pub voting_strategy: VotingStrategy,
    pub fallback_label: String,
}

impl KnnClassifier {
    pub fn new(
        k: usize,
        selection_policy: SelectionPolicy,
        voting_strategy: VotingStrategy,
    ) -> Result<KnnClassifier> {
        if k == 0 {
            return Err(KnnError::InvalidK(k));
        }
        return Ok(KnnClassifier {
            k,
            selection_policy,
            voting_strategy,
            fallback_label: "unknown".to_string(),
        });
    }

    pub fn from_params(params: &Params) -> Result<KnnClassifier> {
        let mut classifier =
            KnnClassifier::new(params.k, params.selection_policy, params.voting_strategy)?;
        classifier.fallback_label = params.fallback_label.clone();
        return Ok(classifier);
    }

    pub fn select(&self, neighborhood: &Neighborhood) -> NeighborSelection {
        let entries = neighborhood
            .iter()
            .map(|entry| {
                let selected = select_top_k(&entry.neighbors, self.k, self.selection_policy);
                (entry.test_id.clone(), selected)
            })
            .collect();
        return NeighborSelection { entries };
    }

    pub fn predict(
        &self,
        neighborhood: &Neighborhood,
        selection: &NeighborSelection,
        labels: &LabelLookup,
    ) -> Predictions {
        let mut predictions = Predictions::new();
        for entry in neighborhood.iter() {
            let selected = selection.get(&entry.test_id).unwrap_or(&[]);
            let prediction = aggregate(selected, &entry.neighbors, labels, self.voting_strategy);
            if let Prediction::NoPredict(reason) = &prediction {
                debug!("no prediction for {}: {}", entry.test_id, reason);
            }
            predictions.insert(entry.test_id.clone(), prediction);
        }
        return predictions;
    }

    /// Runs the full pipeline: neighborhood, selection, aggregation, evaluation.
    ///
    /// An empty training table is a structural error. An empty test table is
    /// not, it produces no predictions and an undefined accuracy.
    pub fn classify(&self, training: &[TrainingGene], test: &[TestGene]) -> Result<ClassificationRun> {
        if training.is_empty() {
            return Err(KnnError::EmptyTrainingTable);
        }

        let neighborhood = Neighborhood::build(training, test);
        if neighborhood.is_empty() && !test.is_empty() {
            warn!("none of the {} test rows carries a usable id", test.len());
        }
        let selection = self.select(&neighborhood);
        let labels = LabelLookup::new(training);
        let predictions = self.predict(&neighborhood, &selection, &labels);
        let evaluation = evaluate(&predictions, &GroundTruth::new(test), &self.fallback_label);

        info!(
            "classified {} test genes against {} training genes with k={} ({}, {}), {} diagnostics",
            neighborhood.len(),
            training.len(),
            self.k,
            self.selection_policy,
            self.voting_strategy,
            neighborhood.diagnostics.len()
        );

        return Ok(ClassificationRun {
            neighborhood,
            selection,
            predictions,
            evaluation,
        });
    }
}
