//! CSV decoder for decision matrices.
//!
//! The first record is the header. The first column holds the alternative
//! identifier and every remaining column is a numeric criterion.

use csv::{ReaderBuilder, Trim};

use crate::domain::topsis::{Alternative, DecisionMatrix, ValidationError};

use super::{TableError, RANK_COLUMN, SCORE_COLUMN};

/// Parses CSV bytes into a validated decision matrix.
///
/// Row and column indices in errors are 0-based over data rows and
/// criterion columns (the identifier column is not counted).
pub fn read_decision_matrix(bytes: &[u8]) -> Result<DecisionMatrix, TableError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let mut columns = headers.iter().map(|s| s.to_string());
    let id_column = columns.next().unwrap_or_default();
    let criteria: Vec<String> = columns.collect();
    if criteria.is_empty() {
        return Err(ValidationError::NoCriteria.into());
    }
    // Score and rank columns are appended to every result row.
    if let Some(label) = std::iter::once(&id_column)
        .chain(&criteria)
        .find(|label| *label == SCORE_COLUMN || *label == RANK_COLUMN)
    {
        return Err(ValidationError::DuplicateColumn {
            label: label.clone(),
        }
        .into());
    }

    let mut rows = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let id = record.get(0).unwrap_or_default().to_string();
        let cells: Vec<&str> = record.iter().skip(1).collect();
        if cells.len() != criteria.len() {
            return Err(ValidationError::RaggedRow {
                row,
                expected: criteria.len(),
                actual: cells.len(),
            }
            .into());
        }

        let values = cells
            .iter()
            .enumerate()
            .map(|(column, raw)| parse_cell(row, column, raw))
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(Alternative::new(id, values));
    }

    Ok(DecisionMatrix::try_new(id_column, criteria, rows)?)
}

fn parse_cell(row: usize, column: usize, raw: &str) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::non_numeric_cell(row, column, raw)),
    }
}
