//! Table adapters - CSV codec for decision matrices and scored results.

mod csv_reader;
mod csv_writer;

pub use csv_reader::read_decision_matrix;
pub use csv_writer::{result_columns, write_scored_rows, RANK_COLUMN, SCORE_COLUMN};

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::topsis::{TopsisError, ValidationError};

/// Errors from decoding or encoding tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write CSV: {0}")]
    Io(String),
}

impl From<TableError> for DomainError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::Validation(inner) => TopsisError::from(inner).into(),
            TableError::Malformed(inner) => {
                DomainError::new(ErrorCode::InvalidFormat, format!("Malformed CSV: {}", inner))
                    .with_detail("field", "file")
            }
            TableError::Io(message) => DomainError::new(ErrorCode::InternalError, message),
        }
    }
}
