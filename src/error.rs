//! Error types for the classifier

use thiserror::Error;

/// Structural failures that halt a run.
///
/// Per-record problems never show up here, they are collected as
/// [`Diagnostic`](crate::representation::diagnostic::Diagnostic) values instead.
#[derive(Debug, Error)]
pub enum KnnError {
    #[error("k must be at least 1, got {0}")]
    InvalidK(usize),

    #[error("training table is empty")]
    EmptyTrainingTable,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("i/o error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{table} schema needs column {column} but the widest row has {width} fields")]
    SchemaMismatch {
        table: String,
        column: usize,
        width: usize,
    },

    #[error("invalid argument {key}: {reason}")]
    InvalidArgument { key: String, reason: String },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KnnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knn_error_display() {
        let err = KnnError::InvalidK(0);
        assert!(format!("{}", err).contains("k must be at least 1"));

        let err = KnnError::EmptyTrainingTable;
        assert!(format!("{}", err).contains("training table is empty"));

        let err = KnnError::SchemaMismatch {
            table: "training".to_string(),
            column: 7,
            width: 5,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("column 7"));
        assert!(msg.contains("5 fields"));

        let err = KnnError::InvalidArgument {
            key: "k".to_string(),
            reason: "not a number".to_string(),
        };
        assert!(format!("{}", err).contains("invalid argument k"));
    }
}
