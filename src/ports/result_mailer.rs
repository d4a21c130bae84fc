//! Result mailer port for delivering result files by email.
//!
//! Defines the contract for mail delivery integrations (e.g., Resend).
//! Implementations receive the already-rendered result file and only handle
//! transport.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::EmailAddress;

/// Port for sending a result file to a recipient.
#[async_trait]
pub trait ResultMailer: Send + Sync {
    /// Sends the attachment to `recipient`.
    async fn send_result(
        &self,
        recipient: &EmailAddress,
        attachment: ResultAttachment,
    ) -> Result<(), MailError>;
}

/// A file attached to the result email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultAttachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl ResultAttachment {
    /// Creates a CSV attachment.
    pub fn csv(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "text/csv".to_string(),
            content,
        }
    }
}

/// Errors from mail delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailError {
    /// Error code for categorization.
    pub code: MailErrorCode,

    /// Human-readable message.
    pub message: String,

    /// HTTP status returned by the provider (if any).
    pub provider_status: Option<u16>,
}

impl MailError {
    /// Create a new mail error.
    pub fn new(code: MailErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_status: None,
        }
    }

    /// Attach the provider's HTTP status.
    pub fn with_provider_status(mut self, status: u16) -> Self {
        self.provider_status = Some(status);
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(MailErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(MailErrorCode::AuthenticationError, message)
    }

    /// Create a rejected-by-provider error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(MailErrorCode::Rejected, message)
    }
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for MailError {}

/// Mail error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API key rejected.
    AuthenticationError,

    /// Provider refused the message.
    Rejected,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Unknown error.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_attachment_sets_content_type() {
        let attachment = ResultAttachment::csv("output.csv", b"a,b\n".to_vec());
        assert_eq!(attachment.content_type, "text/csv");
        assert_eq!(attachment.filename, "output.csv");
    }

    #[test]
    fn mail_error_keeps_provider_status() {
        let err = MailError::rejected("bad sender").with_provider_status(422);
        assert_eq!(err.code, MailErrorCode::Rejected);
        assert_eq!(err.provider_status, Some(422));
    }

    #[test]
    fn mail_error_displays_code_and_message() {
        let err = MailError::network("timeout");
        assert_eq!(err.to_string(), "NetworkError: timeout");
    }
}
