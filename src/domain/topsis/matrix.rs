//! Decision Matrix - alternatives x criteria table of raw values.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// One alternative: an opaque identifier plus one value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: String,
    pub values: Vec<f64>,
}

impl Alternative {
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

/// The decision matrix mapping alternatives x criteria to raw values.
///
/// Construction validates shape and values, so a `DecisionMatrix` always has
/// at least one row, at least one criterion, distinct column labels, rows of
/// equal width and only finite cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    /// Header label of the identifier column.
    id_column: String,
    /// Ordered criterion labels.
    criteria: Vec<String>,
    /// Ordered alternatives.
    rows: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates a matrix, validating every invariant.
    pub fn try_new(
        id_column: impl Into<String>,
        criteria: Vec<String>,
        rows: Vec<Alternative>,
    ) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::NoCriteria);
        }
        if rows.is_empty() {
            return Err(ValidationError::EmptyMatrix);
        }

        let id_column = id_column.into();
        let mut seen = HashSet::new();
        if let Some(label) = std::iter::once(&id_column)
            .chain(&criteria)
            .find(|label| !seen.insert(label.as_str()))
        {
            return Err(ValidationError::DuplicateColumn {
                label: label.clone(),
            });
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.values.len() != criteria.len() {
                return Err(ValidationError::RaggedRow {
                    row: row_index,
                    expected: criteria.len(),
                    actual: row.values.len(),
                });
            }
            if let Some((column, value)) =
                row.values.iter().enumerate().find(|(_, v)| !v.is_finite())
            {
                return Err(ValidationError::non_numeric_cell(
                    row_index,
                    column,
                    value.to_string(),
                ));
            }
        }

        Ok(Self {
            id_column,
            criteria,
            rows,
        })
    }

    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    pub fn rows(&self) -> &[Alternative] {
        &self.rows
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criterion columns.
    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }

    /// Iterates over the values of criterion column `j`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row.values[j])
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug)]
pub struct DecisionMatrixBuilder {
    id_column: String,
    criteria: Vec<String>,
    rows: Vec<Alternative>,
}

impl Default for DecisionMatrixBuilder {
    fn default() -> Self {
        Self {
            id_column: "Alternative".to_string(),
            criteria: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier column label.
    pub fn id_column(mut self, label: impl Into<String>) -> Self {
        self.id_column = label.into();
        self
    }

    /// Sets the criterion labels.
    pub fn criteria(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.criteria = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds an alternative row.
    pub fn row(mut self, id: impl Into<String>, values: Vec<f64>) -> Self {
        self.rows.push(Alternative::new(id, values));
        self
    }

    /// Builds the decision matrix.
    ///
    /// When no criterion labels were given they are generated as `C1..Cn`
    /// from the width of the first row.
    pub fn build(mut self) -> Result<DecisionMatrix, ValidationError> {
        if self.criteria.is_empty() {
            let width = self.rows.first().map(|r| r.values.len()).unwrap_or(0);
            self.criteria = (1..=width).map(|i| format!("C{}", i)).collect();
        }
        DecisionMatrix::try_new(self.id_column, self.criteria, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_matrix() {
        let matrix = DecisionMatrix::builder()
            .criteria(vec!["Price", "Storage"])
            .row("A", vec![250.0, 16.0])
            .row("B", vec![200.0, 32.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criteria_count(), 2);
        assert_eq!(matrix.id_column(), "Alternative");
        assert_eq!(matrix.column(1).collect::<Vec<_>>(), vec![16.0, 32.0]);
    }

    #[test]
    fn builder_generates_criterion_labels() {
        let matrix = DecisionMatrix::builder()
            .row("A", vec![1.0, 2.0, 3.0])
            .build()
            .unwrap();
        assert_eq!(matrix.criteria(), &["C1", "C2", "C3"]);
    }

    #[test]
    fn rejects_empty_matrix() {
        let err = DecisionMatrix::builder()
            .criteria(vec!["C1"])
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::EmptyMatrix);
    }

    #[test]
    fn rejects_matrix_without_criteria() {
        let err = DecisionMatrix::builder().row("A", vec![]).build().unwrap_err();
        assert_eq!(err, ValidationError::NoCriteria);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = DecisionMatrix::builder()
            .row("A", vec![1.0, 2.0])
            .row("B", vec![1.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_duplicate_criterion_labels() {
        let err = DecisionMatrix::builder()
            .criteria(vec!["Price", "Storage", "Price"])
            .row("A", vec![1.0, 2.0, 3.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateColumn {
                label: "Price".to_string()
            }
        );
    }

    #[test]
    fn rejects_criterion_named_like_id_column() {
        let err = DecisionMatrix::builder()
            .id_column("Model")
            .criteria(vec!["Model", "Price"])
            .row("A", vec![1.0, 2.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateColumn { .. }));
    }

    #[test]
    fn rejects_non_finite_cells() {
        let err = DecisionMatrix::builder()
            .row("A", vec![1.0, f64::NAN])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonNumericCell { row: 0, column: 1, .. }
        ));
    }

    #[test]
    fn matrix_serializes_to_json() {
        let matrix = DecisionMatrix::builder()
            .row("A", vec![1.0])
            .build()
            .unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("id_column"));
        assert!(json.contains("criteria"));
    }
}
