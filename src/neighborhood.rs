use std::collections::HashSet;

use tracing::debug;

use crate::representation::diagnostic::Diagnostic;
use crate::representation::gene::{TestGene, TrainingGene};
use crate::representation::neighbor::Neighbor;
use crate::scoring::{decode, score, FULL_MATCH_WEIGHT};

/// All training genes weighted against one test gene, in training table order.
#[derive(Clone, Debug)]
pub struct TestNeighborhood {
    pub test_id: String,
    pub neighbors: Vec<Neighbor>,
}

#[derive(Clone, Debug, Default)]
pub struct Neighborhood {
    entries: Vec<TestNeighborhood>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Neighborhood {
    /// Weighs every test gene against every training gene.
    ///
    /// Test genes without an id are skipped, and a repeated test id is only
    /// processed for its first occurrence. Every list holds exactly one entry
    /// per training gene, zero weights included.
    pub fn build(training: &[TrainingGene], test: &[TestGene]) -> Neighborhood {
        let mut entries = Vec::with_capacity(test.len());
        let mut diagnostics = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for (row, test_gene) in test.iter().enumerate() {
            let test_id = match &test_gene.id {
                Some(id) => id,
                None => {
                    diagnostics.push(Diagnostic::SkippedTestRow { row });
                    continue;
                }
            };
            if !seen.insert(test_id.as_str()) {
                diagnostics.push(Diagnostic::DuplicateTestId {
                    row,
                    test_id: test_id.clone(),
                });
                continue;
            }

            let mut neighbors = Vec::with_capacity(training.len());
            for training_gene in training {
                let similarity = score(&test_gene.attributes, &training_gene.attributes);
                for attribute in similarity.unmatched {
                    diagnostics.push(Diagnostic::UnmatchedAttribute {
                        test_id: test_id.clone(),
                        training_id: training_gene.id.clone(),
                        attribute,
                    });
                }
                neighbors.push(Neighbor::new(&training_gene.id, similarity.weight));
            }

            if let Some(closest) = neighbors.iter().rev().max_by_key(|n| n.weight) {
                debug!(
                    "{} is closest to {} on {:?}{}",
                    test_id,
                    closest.training_id,
                    decode(closest.weight),
                    if closest.weight == FULL_MATCH_WEIGHT { " (full match)" } else { "" }
                );
            }

            entries.push(TestNeighborhood {
                test_id: test_id.clone(),
                neighbors,
            });
        }

        debug!(
            "built neighborhoods for {} test genes against {} training genes",
            entries.len(),
            training.len()
        );

        return Neighborhood {
            entries,
            diagnostics,
        };
    }

    #[cfg(test)]
    pub fn get(&self, test_id: &str) -> Option<&[Neighbor]> {
        return self
            .entries
            .iter()
            .find(|entry| entry.test_id == test_id)
            .map(|entry| entry.neighbors.as_slice());
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestNeighborhood> {
        return self.entries.iter();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
