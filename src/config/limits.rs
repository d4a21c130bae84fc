//! Input size limits

use serde::Deserialize;

use super::error::ValidationError;

/// Caps applied to uploaded matrices before scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum multipart request body size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Maximum number of alternatives (data rows)
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Maximum number of criterion columns
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,
}

impl LimitsConfig {
    /// Validate limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_upload_bytes == 0 || self.max_rows == 0 || self.max_criteria == 0 {
            return Err(ValidationError::InvalidLimit);
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_rows: default_max_rows(),
            max_criteria: default_max_criteria(),
        }
    }
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

fn default_max_rows() -> usize {
    10_000
}

fn default_max_criteria() -> usize {
    256
}
