//! Error types for TOPSIS scoring.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Malformed or mismatched scoring input.
///
/// Raised before any computation happens; the caller's data is never touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Decision matrix has no rows")]
    EmptyMatrix,

    #[error("Decision matrix has no criterion columns")]
    NoCriteria,

    #[error("Row {row} has {actual} criterion values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cell at row {row}, column {column} is not a finite number: '{value}'")]
    NonNumericCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Column label '{label}' appears more than once")]
    DuplicateColumn { label: String },

    #[error("Expected {expected} {what}, got {actual}")]
    CountMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Weight at index {index} is not a positive finite number: '{value}'")]
    InvalidWeight { index: usize, value: String },

    #[error("Impact at index {index} must be '+' or '-', got '{symbol}'")]
    InvalidImpact { index: usize, symbol: String },

    #[error("Matrix has {actual} {what}, limit is {limit}")]
    TooLarge {
        what: &'static str,
        limit: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates a count mismatch error for the named input.
    pub fn count_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        ValidationError::CountMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Creates a non-numeric cell error.
    pub fn non_numeric_cell(row: usize, column: usize, value: impl Into<String>) -> Self {
        ValidationError::NonNumericCell {
            row,
            column,
            value: value.into(),
        }
    }

    /// Creates an invalid weight error.
    pub fn invalid_weight(index: usize, value: impl Into<String>) -> Self {
        ValidationError::InvalidWeight {
            index,
            value: value.into(),
        }
    }

    /// Creates an invalid impact error.
    pub fn invalid_impact(index: usize, symbol: impl Into<String>) -> Self {
        ValidationError::InvalidImpact {
            index,
            symbol: symbol.into(),
        }
    }
}

/// Degenerate numeric condition met while scoring.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("Criterion column {column} has zero norm (all values are zero)")]
    ZeroColumnNorm { column: usize },

    #[error("Row {row} coincides with both ideal points (zero distance sum)")]
    ZeroDistanceSum { row: usize },
}

/// Any failure produced by the scorer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl From<TopsisError> for DomainError {
    fn from(err: TopsisError) -> Self {
        match &err {
            TopsisError::Validation(ValidationError::TooLarge { what, limit, .. }) => {
                DomainError::new(ErrorCode::PayloadTooLarge, err.to_string())
                    .with_detail("input", *what)
                    .with_detail("limit", limit.to_string())
            }
            TopsisError::Validation(inner) => {
                let error = DomainError::new(ErrorCode::ValidationFailed, err.to_string());
                match inner {
                    ValidationError::CountMismatch {
                        what,
                        expected,
                        actual,
                    } => error
                        .with_detail("input", *what)
                        .with_detail("expected", expected.to_string())
                        .with_detail("actual", actual.to_string()),
                    ValidationError::NonNumericCell { row, column, .. } => error
                        .with_detail("row", row.to_string())
                        .with_detail("column", column.to_string()),
                    ValidationError::RaggedRow { row, .. } => {
                        error.with_detail("row", row.to_string())
                    }
                    ValidationError::DuplicateColumn { label } => {
                        error.with_detail("label", label.as_str())
                    }
                    ValidationError::InvalidWeight { index, .. }
                    | ValidationError::InvalidImpact { index, .. } => {
                        error.with_detail("index", index.to_string())
                    }
                    _ => error,
                }
            }
            TopsisError::Arithmetic(inner) => {
                let error = DomainError::new(ErrorCode::DegenerateInput, err.to_string());
                match inner {
                    ArithmeticError::ZeroColumnNorm { column } => {
                        error.with_detail("column", column.to_string())
                    }
                    ArithmeticError::ZeroDistanceSum { row } => {
                        error.with_detail("row", row.to_string())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_displays_expected_and_actual() {
        let err = ValidationError::count_mismatch("weights", 4, 3);
        assert_eq!(format!("{}", err), "Expected 4 weights, got 3");
    }

    #[test]
    fn zero_column_norm_displays_column() {
        let err = ArithmeticError::ZeroColumnNorm { column: 2 };
        assert_eq!(
            format!("{}", err),
            "Criterion column 2 has zero norm (all values are zero)"
        );
    }

    #[test]
    fn topsis_error_is_transparent() {
        let err: TopsisError = ValidationError::EmptyMatrix.into();
        assert_eq!(format!("{}", err), "Decision matrix has no rows");
        assert!(matches!(err, TopsisError::Validation(_)));
    }

    #[test]
    fn domain_error_carries_mismatch_details() {
        let err: DomainError = TopsisError::from(ValidationError::count_mismatch("impacts", 4, 2)).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("expected"), Some(&"4".to_string()));
        assert_eq!(err.details.get("actual"), Some(&"2".to_string()));
    }

    #[test]
    fn domain_error_names_duplicate_label() {
        let err: DomainError = TopsisError::from(ValidationError::DuplicateColumn {
            label: "Price".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("label"), Some(&"Price".to_string()));
    }

    #[test]
    fn domain_error_maps_arithmetic_to_degenerate_input() {
        let err: DomainError =
            TopsisError::from(ArithmeticError::ZeroColumnNorm { column: 1 }).into();
        assert_eq!(err.code, ErrorCode::DegenerateInput);
        assert_eq!(err.details.get("column"), Some(&"1".to_string()));
    }

    #[test]
    fn domain_error_maps_too_large_to_payload_too_large() {
        let err: DomainError = TopsisError::from(ValidationError::TooLarge {
            what: "rows",
            limit: 10,
            actual: 11,
        })
        .into();
        assert_eq!(err.code, ErrorCode::PayloadTooLarge);
        assert_eq!(err.details.get("limit"), Some(&"10".to_string()));
    }
}
