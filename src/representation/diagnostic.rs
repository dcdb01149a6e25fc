use serde::Serialize;
use strum_macros::Display;

use crate::representation::gene::GeneAttribute;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display, Serialize)]
pub enum TableKind {
    Training,
    Test,
}

/// A non-fatal problem with a single record or record pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Diagnostic {
    /// A row is too short for a column the schema asks for.
    MissingField {
        table: TableKind,
        row: usize,
        field: &'static str,
        column: usize,
    },
    /// A training row without an id can never be referenced and is dropped.
    DroppedTrainingRow { row: usize },
    /// A test row without an id is not classified.
    SkippedTestRow { row: usize },
    /// Later occurrences of an already classified test id are ignored.
    DuplicateTestId { row: usize, test_id: String },
    /// An attribute was absent on one side of a comparison and counted as a mismatch.
    UnmatchedAttribute {
        test_id: String,
        training_id: String,
        attribute: GeneAttribute,
    },
}
