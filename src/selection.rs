use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::representation::neighbor::Neighbor;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Greedy single pass over k slots, each candidate lands in the first slot it beats.
    #[default]
    LegacySlotScan,
    /// Stable sort by descending weight, first seen wins ties.
    ExactTopK,
}

/// Picks at most `k` distinct training ids from a neighborhood.
///
/// Callers must not assume exactly `k` ids come back.
pub fn select_top_k(neighbors: &[Neighbor], k: usize, policy: SelectionPolicy) -> Vec<String> {
    match policy {
        SelectionPolicy::LegacySlotScan => legacy_slot_scan(neighbors, k),
        SelectionPolicy::ExactTopK => exact_top_k(neighbors, k),
    }
}

/// A candidate replaces only the first slot whose weight it exceeds, and only
/// while its id is not already held. A stronger candidate can therefore miss a
/// weaker slot further right, and zero weights never fill a slot.
fn legacy_slot_scan(neighbors: &[Neighbor], k: usize) -> Vec<String> {
    let mut slots: Vec<(u32, Option<&str>)> = vec![(0, None); k];

    for neighbor in neighbors {
        let id = neighbor.training_id.as_str();
        if slots.iter().any(|(_, held)| *held == Some(id)) {
            continue;
        }
        if let Some(slot) = slots.iter_mut().find(|(weight, _)| neighbor.weight > *weight) {
            *slot = (neighbor.weight, Some(id));
        }
    }

    return slots
        .into_iter()
        .filter_map(|(_, id)| id)
        .unique()
        .map(String::from)
        .collect();
}

fn exact_top_k(neighbors: &[Neighbor], k: usize) -> Vec<String> {
    return neighbors
        .iter()
        .sorted_by(|a, b| b.weight.cmp(&a.weight))
        .map(|neighbor| neighbor.training_id.as_str())
        .unique()
        .take(k)
        .map(String::from)
        .collect();
}
