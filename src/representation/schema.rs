use serde::{Deserialize, Serialize};

use crate::error::{KnnError, Result};
use crate::representation::diagnostic::{Diagnostic, TableKind};
use crate::representation::gene::{GeneAttributes, TestGene, TrainingGene};

/// Column positions of the named gene fields within one table kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub id: usize,
    pub class: usize,
    pub complex: usize,
    pub motif: usize,
    pub localization: usize,
}

impl RecordSchema {
    /// Layout of `training_data.csv`.
    pub fn training_default() -> RecordSchema {
        return RecordSchema {
            id: 6,
            class: 1,
            complex: 2,
            motif: 4,
            localization: 7,
        };
    }

    /// Layout of the test export, where id and localization trade places.
    pub fn test_default() -> RecordSchema {
        return RecordSchema {
            id: 7,
            class: 1,
            complex: 2,
            motif: 4,
            localization: 6,
        };
    }

    pub fn max_column(&self) -> usize {
        return [self.id, self.class, self.complex, self.motif, self.localization]
            .into_iter()
            .max()
            .unwrap_or(0);
    }

    /// Fails when no row is wide enough to hold every column of the schema.
    pub fn check_fits(&self, rows: &[Vec<String>], table: TableKind) -> Result<()> {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        if !rows.is_empty() && self.max_column() >= width {
            return Err(KnnError::SchemaMismatch {
                table: table.to_string(),
                column: self.max_column(),
                width,
            });
        }
        Ok(())
    }

    pub fn project_training(&self, rows: &[Vec<String>]) -> (Vec<TrainingGene>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let mut genes = Vec::with_capacity(rows.len());

        for (n, row) in rows.iter().enumerate() {
            let mut cell = FieldReader::new(row, n, TableKind::Training, &mut diagnostics);
            let id = cell.read("id", self.id);
            let attributes = self.read_attributes(&mut cell);
            let localization = cell.read("localization", self.localization);

            match id {
                Some(id) => genes.push(TrainingGene {
                    id,
                    attributes,
                    localization,
                }),
                None => diagnostics.push(Diagnostic::DroppedTrainingRow { row: n }),
            }
        }

        return (genes, diagnostics);
    }

    pub fn project_test(&self, rows: &[Vec<String>]) -> (Vec<TestGene>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let genes = rows
            .iter()
            .enumerate()
            .map(|(n, row)| {
                let mut cell = FieldReader::new(row, n, TableKind::Test, &mut diagnostics);
                TestGene {
                    id: cell.read("id", self.id),
                    attributes: self.read_attributes(&mut cell),
                    localization: cell.read("localization", self.localization),
                }
            })
            .collect();

        return (genes, diagnostics);
    }

    fn read_attributes(&self, cell: &mut FieldReader) -> GeneAttributes {
        return GeneAttributes {
            class: cell.read("class", self.class),
            complex: cell.read("complex", self.complex),
            motif: cell.read("motif", self.motif),
        };
    }
}

struct FieldReader<'a> {
    row: &'a [String],
    row_idx: usize,
    table: TableKind,
    diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> FieldReader<'a> {
    fn new(
        row: &'a [String],
        row_idx: usize,
        table: TableKind,
        diagnostics: &'a mut Vec<Diagnostic>,
    ) -> FieldReader<'a> {
        return FieldReader {
            row,
            row_idx,
            table,
            diagnostics,
        };
    }

    fn read(&mut self, field: &'static str, column: usize) -> Option<String> {
        let value = self.row.get(column).cloned();
        if value.is_none() {
            self.diagnostics.push(Diagnostic::MissingField {
                table: self.table,
                row: self.row_idx,
                field,
                column,
            });
        }
        return value;
    }
}
