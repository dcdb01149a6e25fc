use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::representation::gene::TrainingGene;
use crate::representation::neighbor::Neighbor;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Prediction {
    Localization(String),
    NoPredict(NoPredictReason),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, Serialize)]
pub enum NoPredictReason {
    /// Nothing was selected for the test gene.
    EmptyNeighborhood,
    /// The winning neighbors carry no localization.
    UnlabeledNeighbor,
}

impl Prediction {
    pub fn label(&self) -> Option<&str> {
        match self {
            Prediction::Localization(label) => Some(label.as_str()),
            Prediction::NoPredict(_) => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum VotingStrategy {
    /// The highest weighted neighbor wins, the last one scanned on ties.
    #[default]
    MaxWeightLastSeen,
    /// Most neighbors per label.
    Plurality,
    /// Highest summed weight per label.
    WeightedSum,
}

/// Training id to localization. A repeated id keeps the label of its last row.
#[derive(Clone, Debug, Default)]
pub struct LabelLookup {
    labels: HashMap<String, String>,
}

impl LabelLookup {
    pub fn new(training: &[TrainingGene]) -> LabelLookup {
        let mut labels = HashMap::new();
        for gene in training {
            match &gene.localization {
                Some(localization) => {
                    labels.insert(gene.id.clone(), localization.clone());
                }
                None => {
                    labels.remove(&gene.id);
                }
            }
        }
        return LabelLookup { labels };
    }

    pub fn get(&self, training_id: &str) -> Option<&str> {
        return self.labels.get(training_id).map(|label| label.as_str());
    }
}

/// Derives a prediction from the selected neighbor ids.
///
/// `neighbors` is the full neighborhood of the test gene and only supplies the
/// weights of the selected ids. An empty selection never panics, it yields
/// [`NoPredictReason::EmptyNeighborhood`].
pub fn aggregate(
    selected: &[String],
    neighbors: &[Neighbor],
    labels: &LabelLookup,
    strategy: VotingStrategy,
) -> Prediction {
    let weighted = restrict_to_selection(selected, neighbors);
    if weighted.is_empty() {
        return Prediction::NoPredict(NoPredictReason::EmptyNeighborhood);
    }

    let winner = match strategy {
        VotingStrategy::MaxWeightLastSeen => max_weight_last_seen(&weighted, labels),
        VotingStrategy::Plurality => tally_vote(selected, &weighted, labels, |_| 1),
        VotingStrategy::WeightedSum => tally_vote(selected, &weighted, labels, |w| w as u64),
    };

    return match winner {
        Some(label) => Prediction::Localization(label.to_string()),
        None => Prediction::NoPredict(NoPredictReason::UnlabeledNeighbor),
    };
}

/// Selected ids with their weight, in scan order. A repeated id stays at its
/// first position and keeps the weight of its last occurrence.
fn restrict_to_selection<'a>(selected: &[String], neighbors: &'a [Neighbor]) -> Vec<(&'a str, u32)> {
    let mut weighted: Vec<(&str, u32)> = Vec::with_capacity(selected.len());

    for neighbor in neighbors {
        if !selected.contains(&neighbor.training_id) {
            continue;
        }
        match weighted.iter_mut().find(|(id, _)| *id == neighbor.training_id) {
            Some(entry) => entry.1 = neighbor.weight,
            None => weighted.push((neighbor.training_id.as_str(), neighbor.weight)),
        }
    }

    return weighted;
}

fn max_weight_last_seen<'a>(weighted: &[(&str, u32)], labels: &'a LabelLookup) -> Option<&'a str> {
    let max_weight = weighted.iter().map(|(_, weight)| *weight).max()?;
    let (winner, _) = weighted
        .iter()
        .rev()
        .find(|(_, weight)| *weight == max_weight)?;

    return labels.get(winner);
}

/// Scores every label over the selected neighbors in rank order. Ties go to the
/// label whose first supporter ranks highest. Unlabeled neighbors do not vote.
fn tally_vote<'a, F>(
    selected: &[String],
    weighted: &[(&str, u32)],
    labels: &'a LabelLookup,
    ballot: F,
) -> Option<&'a str>
where
    F: Fn(u32) -> u64,
{
    let mut tally: Vec<(&str, u64)> = Vec::new();

    for id in selected {
        let weight = match weighted.iter().find(|(w_id, _)| *w_id == id.as_str()) {
            Some((_, weight)) => *weight,
            None => continue,
        };
        let label = match labels.get(id) {
            Some(label) => label,
            None => continue,
        };
        match tally.iter_mut().find(|(l, _)| *l == label) {
            Some(entry) => entry.1 += ballot(weight),
            None => tally.push((label, ballot(weight))),
        }
    }

    // max_by_key keeps the last maximum, so scan backwards to favour rank order
    return tally
        .iter()
        .rev()
        .max_by_key(|(_, score)| *score)
        .map(|(label, _)| *label);
}

/// Test id to prediction, in test table order.
#[derive(Clone, Debug, Default)]
pub struct Predictions {
    entries: Vec<(String, Prediction)>,
}

impl Predictions {
    pub fn new() -> Predictions {
        return Predictions { entries: Vec::new() };
    }

    pub fn insert(&mut self, test_id: String, prediction: Prediction) {
        match self.entries.iter_mut().find(|(id, _)| *id == test_id) {
            Some(entry) => entry.1 = prediction,
            None => self.entries.push((test_id, prediction)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, test_id: &str) -> Option<&Prediction> {
        return self
            .entries
            .iter()
            .find(|(id, _)| id == test_id)
            .map(|(_, prediction)| prediction);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Prediction)> {
        return self
            .entries
            .iter()
            .map(|(id, prediction)| (id.as_str(), prediction));
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
