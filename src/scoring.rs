use strum::IntoEnumIterator;

use crate::representation::gene::{GeneAttribute, GeneAttributes};

pub const COMPLEX_WEIGHT: u32 = 1000;
pub const CLASS_WEIGHT: u32 = 100;
pub const MOTIF_WEIGHT: u32 = 10;

pub const FULL_MATCH_WEIGHT: u32 = COMPLEX_WEIGHT + CLASS_WEIGHT + MOTIF_WEIGHT;

/// Weights are distinct powers of ten so a summed weight can be decoded back
/// into the attributes that matched.
pub fn attribute_weight(attribute: GeneAttribute) -> u32 {
    match attribute {
        GeneAttribute::Complex => COMPLEX_WEIGHT,
        GeneAttribute::Class => CLASS_WEIGHT,
        GeneAttribute::Motif => MOTIF_WEIGHT,
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Similarity {
    pub weight: u32,
    /// Attributes missing on either side, counted as mismatches.
    pub unmatched: Vec<GeneAttribute>,
}

pub fn score(test: &GeneAttributes, training: &GeneAttributes) -> Similarity {
    let mut weight = 0;
    let mut unmatched = Vec::new();

    for attribute in GeneAttribute::iter() {
        match (test.get(attribute), training.get(attribute)) {
            (Some(a), Some(b)) => {
                if a == b {
                    weight += attribute_weight(attribute);
                }
            }
            _ => unmatched.push(attribute),
        }
    }

    return Similarity { weight, unmatched };
}

#[cfg(test)]
pub fn weight(test: &GeneAttributes, training: &GeneAttributes) -> u32 {
    return score(test, training).weight;
}

/// Attributes that contributed to `weight`, in descending weight order.
pub fn decode(weight: u32) -> Vec<GeneAttribute> {
    let mut matched = vec![
        GeneAttribute::Complex,
        GeneAttribute::Class,
        GeneAttribute::Motif,
    ];
    matched.retain(|attribute| (weight / attribute_weight(*attribute)) % 10 == 1);
    return matched;
}
