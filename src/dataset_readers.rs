use csv::ReaderBuilder;
use tracing::{error, info};

use crate::error::{KnnError, Result};
use crate::params::Params;
use crate::representation::diagnostic::{Diagnostic, TableKind};
use crate::representation::gene::{TestGene, TrainingGene};
use crate::representation::schema::RecordSchema;

/// Reads a delimited file into raw rows. Rows may differ in width.
pub fn read_rows(path: &str, delimiter: u8, has_headers: bool) -> Result<Vec<Vec<String>>> {
    let to_read_err = |source: csv::Error| KnnError::Read {
        path: path.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .flexible(true)
        .from_path(path)
        .map_err(to_read_err)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(to_read_err)?;
        rows.push(record.iter().map(String::from).collect::<Vec<_>>());
    }

    return Ok(rows);
}

fn read_table_rows(path: &str, params: &Params, schema: &RecordSchema, table: TableKind) -> Result<Vec<Vec<String>>> {
    info!("Reading {} data from {}", table, path);
    let rows = match read_rows(path, params.delimiter_byte()?, params.has_headers) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to read {} table: {}", table, e);
            return Err(e);
        }
    };
    schema.check_fits(&rows, table)?;
    return Ok(rows);
}

pub fn read_training_table(params: &Params) -> Result<(Vec<TrainingGene>, Vec<Diagnostic>)> {
    let rows = read_table_rows(
        &params.training_path,
        params,
        &params.training_schema,
        TableKind::Training,
    )?;
    let (genes, diagnostics) = params.training_schema.project_training(&rows);
    info!(
        "Loaded {} training genes from {} rows",
        genes.len(),
        rows.len()
    );
    return Ok((genes, diagnostics));
}

pub fn read_test_table(params: &Params) -> Result<(Vec<TestGene>, Vec<Diagnostic>)> {
    let rows = read_table_rows(&params.test_path, params, &params.test_schema, TableKind::Test)?;
    let (genes, diagnostics) = params.test_schema.project_test(&rows);
    info!("Loaded {} test genes", genes.len());
    return Ok((genes, diagnostics));
}
