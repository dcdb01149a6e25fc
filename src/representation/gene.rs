use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// The categorical attributes compared between a test and a training gene.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumString, EnumIter, Serialize)]
pub enum GeneAttribute {
    Class,
    Complex,
    Motif,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GeneAttributes {
    pub class: Option<String>,
    pub complex: Option<String>,
    /// Phenotype family column.
    pub motif: Option<String>,
}

impl GeneAttributes {
    #[cfg(test)]
    pub fn new(class: &str, complex: &str, motif: &str) -> GeneAttributes {
        return GeneAttributes {
            class: Some(class.to_string()),
            complex: Some(complex.to_string()),
            motif: Some(motif.to_string()),
        };
    }

    pub fn get(&self, attribute: GeneAttribute) -> Option<&str> {
        let value = match attribute {
            GeneAttribute::Class => &self.class,
            GeneAttribute::Complex => &self.complex,
            GeneAttribute::Motif => &self.motif,
        };
        return value.as_deref();
    }
}

/// A labeled reference gene.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrainingGene {
    pub id: String,
    pub attributes: GeneAttributes,
    pub localization: Option<String>,
}

impl TrainingGene {
    #[cfg(test)]
    pub fn new(id: &str, attributes: GeneAttributes, localization: &str) -> TrainingGene {
        return TrainingGene {
            id: id.to_string(),
            attributes,
            localization: Some(localization.to_string()),
        };
    }

    /// Reuses a training gene as a held out test gene, keeping its label as ground truth.
    pub fn as_test_gene(&self) -> TestGene {
        return TestGene {
            id: Some(self.id.clone()),
            attributes: self.attributes.clone(),
            localization: self.localization.clone(),
        };
    }
}

/// A gene to classify. `localization` is the ground truth when the table carries one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestGene {
    pub id: Option<String>,
    pub attributes: GeneAttributes,
    pub localization: Option<String>,
}

impl TestGene {
    #[cfg(test)]
    pub fn new(id: &str, attributes: GeneAttributes) -> TestGene {
        return TestGene {
            id: Some(id.to_string()),
            attributes,
            localization: None,
        };
    }

    #[cfg(test)]
    pub fn with_localization(mut self, localization: &str) -> TestGene {
        self.localization = Some(localization.to_string());
        return self;
    }
}
