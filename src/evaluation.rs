use std::collections::HashMap;

use serde::Serialize;

use crate::prediction::{Prediction, Predictions};
use crate::representation::gene::TestGene;

/// Test id to its known localization. The first row of a repeated id wins,
/// matching the row the neighborhood was built from.
#[derive(Clone, Debug, Default)]
pub struct GroundTruth {
    labels: HashMap<String, String>,
}

impl GroundTruth {
    pub fn new(test: &[TestGene]) -> GroundTruth {
        let mut labels = HashMap::new();
        for gene in test {
            if let (Some(id), Some(localization)) = (&gene.id, &gene.localization) {
                labels
                    .entry(id.clone())
                    .or_insert_with(|| localization.clone());
            }
        }
        return GroundTruth { labels };
    }

    pub fn get(&self, test_id: &str) -> Option<&str> {
        return self.labels.get(test_id).map(|label| label.as_str());
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EvaluatedRecord {
    pub test_id: String,
    pub predicted: String,
    pub actual: Option<String>,
    pub correct: bool,
    pub no_predict: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct EvaluationResult {
    pub total: usize,
    pub correct: usize,
    /// Records that fell back to the fallback label.
    pub no_predict: usize,
    pub missing_truth: usize,
    /// `None` when there was nothing to evaluate.
    pub accuracy: Option<f64>,
    pub report_lines: Vec<String>,
    #[serde(skip_serializing)]
    pub records: Vec<EvaluatedRecord>,
}

impl EvaluationResult {
    pub fn wrong(&self) -> usize {
        return self.total - self.correct - self.no_predict;
    }
}

/// Compares every prediction to its ground truth.
///
/// A missing prediction is reported with `fallback_label` and never counts as
/// correct. Missing ground truth counts as a miss.
pub fn evaluate(
    predictions: &Predictions,
    ground_truth: &GroundTruth,
    fallback_label: &str,
) -> EvaluationResult {
    let mut correct = 0;
    let mut no_predict = 0;
    let mut missing_truth = 0;
    let mut report_lines = Vec::with_capacity(predictions.len());
    let mut records = Vec::with_capacity(predictions.len());

    for (test_id, prediction) in predictions.iter() {
        let actual = ground_truth.get(test_id);
        let predicted = prediction.label().unwrap_or(fallback_label);

        if actual.is_none() {
            missing_truth += 1;
        }
        let is_correct = match (prediction, actual) {
            (Prediction::Localization(label), Some(actual)) => label == actual,
            (Prediction::NoPredict(_), _) => {
                no_predict += 1;
                false
            }
            _ => false,
        };
        if is_correct {
            correct += 1;
        }

        report_lines.push(format!("{} | {}", test_id, predicted));
        records.push(EvaluatedRecord {
            test_id: test_id.to_string(),
            predicted: predicted.to_string(),
            actual: actual.map(String::from),
            correct: is_correct,
            no_predict: matches!(prediction, Prediction::NoPredict(_)),
        });
    }

    let total = predictions.len();
    return EvaluationResult {
        total,
        correct,
        no_predict,
        missing_truth,
        accuracy: accuracy_percent(correct, total),
        report_lines,
        records,
    };
}

pub fn accuracy_percent(correct: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    return Some(correct as f64 / total as f64 * 100.0);
}
