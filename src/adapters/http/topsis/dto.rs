//! HTTP DTOs for TOPSIS endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::adapters::table::{result_columns, RANK_COLUMN, SCORE_COLUMN};
use crate::application::handlers::topsis::{RunTopsisCommand, RunTopsisResult};
use crate::domain::foundation::{DomainError, ErrorCode};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Fields collected from a `multipart/form-data` scoring request.
#[derive(Debug, Clone, Default)]
pub struct TopsisForm {
    pub file_name: Option<String>,
    pub file: Option<Vec<u8>>,
    pub weights: Option<String>,
    pub impacts: Option<String>,
    pub email: Option<String>,
    pub send_mail: Option<String>,
}

impl TopsisForm {
    /// Converts the form into a scoring command.
    pub fn into_command(self) -> Result<RunTopsisCommand, ErrorResponse> {
        let csv = self
            .file
            .ok_or_else(|| ErrorResponse::bad_request("CSV file required"))?;

        let (weights, impacts) = match (self.weights, self.impacts) {
            (Some(w), Some(i)) if !w.trim().is_empty() && !i.trim().is_empty() => (w, i),
            _ => {
                return Err(ErrorResponse::bad_request(
                    "Weights and impacts are required",
                ))
            }
        };

        Ok(RunTopsisCommand {
            file_name: self.file_name,
            csv,
            weights,
            impacts,
            email: self.email.filter(|e| !e.trim().is_empty()),
            send_mail: self.send_mail.as_deref().map(is_truthy).unwrap_or(false),
        })
    }
}

/// Interprets an HTML form flag.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "on" | "yes"
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct TopsisRunResponse {
    pub run_id: String,
    /// Column order of `table` and `csv`.
    pub columns: Vec<String>,
    /// One object per input row, in input order, keys in `columns` order.
    pub table: Vec<Map<String, Value>>,
    /// The result file as text.
    pub csv: String,
    pub download_name: String,
    #[serde(rename = "emailSent")]
    pub email_sent: bool,
    /// Always present; `null` when no email problem occurred.
    #[serde(rename = "emailError")]
    pub email_error: Option<String>,
    pub computed_at: String,
}

impl From<RunTopsisResult> for TopsisRunResponse {
    fn from(result: RunTopsisResult) -> Self {
        let matrix = &result.matrix;
        let table = result
            .analysis
            .rows
            .iter()
            .map(|row| {
                let mut record = Map::new();
                record.insert(matrix.id_column().to_string(), Value::from(row.id.clone()));
                for (label, value) in matrix.criteria().iter().zip(&row.values) {
                    record.insert(label.clone(), Value::from(*value));
                }
                record.insert(SCORE_COLUMN.to_string(), Value::from(row.score));
                record.insert(RANK_COLUMN.to_string(), Value::from(row.rank));
                record
            })
            .collect();

        Self {
            run_id: result.run_id.to_string(),
            columns: result_columns(matrix),
            table,
            csv: String::from_utf8_lossy(&result.csv).into_owned(),
            download_name: result.download_name,
            email_sent: result.email_sent,
            email_error: result.email_error,
            computed_at: result.computed_at.to_rfc3339(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::PayloadTooLarge.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}
