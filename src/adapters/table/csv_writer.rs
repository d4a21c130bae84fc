//! CSV encoder for scored results.

use csv::WriterBuilder;

use crate::domain::topsis::{DecisionMatrix, ScoredRow};

use super::TableError;

/// Header label of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header label of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Returns the output header: original columns plus score and rank.
pub fn result_columns(matrix: &DecisionMatrix) -> Vec<String> {
    std::iter::once(matrix.id_column().to_string())
        .chain(matrix.criteria().iter().cloned())
        .chain([SCORE_COLUMN.to_string(), RANK_COLUMN.to_string()])
        .collect()
}

/// Renders scored rows as CSV, in the order given.
pub fn write_scored_rows(
    matrix: &DecisionMatrix,
    rows: &[ScoredRow],
) -> Result<Vec<u8>, TableError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(result_columns(matrix))?;

    for row in rows {
        let record: Vec<String> = std::iter::once(row.id.clone())
            .chain(row.values.iter().map(|v| v.to_string()))
            .chain([row.score.to_string(), row.rank.to_string()])
            .collect();
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| TableError::Io(e.into_error().to_string()))
}
