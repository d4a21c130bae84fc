//! Mock mailer for testing.
//!
//! Records every send instead of delivering it, and can be told to fail so
//! callers can exercise their failure paths.
//!
//! # Example
//!
//! ```ignore
//! let mailer = MockMailer::new();
//! handler_with(mailer.clone()).handle(cmd).await?;
//! assert_eq!(mailer.sent().len(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::EmailAddress;
use crate::ports::{MailError, ResultAttachment, ResultMailer};

/// A recorded send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub recipient: EmailAddress,
    pub attachment: ResultAttachment,
}

/// Mock mailer that records sends.
#[derive(Debug, Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
    failure: Option<MailError>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every send fail with `error`.
    pub fn failing_with(error: MailError) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(error),
        }
    }

    /// Returns the sends recorded so far.
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ResultMailer for MockMailer {
    async fn send_result(
        &self,
        recipient: &EmailAddress,
        attachment: ResultAttachment,
    ) -> Result<(), MailError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(SentMail {
                recipient: recipient.clone(),
                attachment,
            });
        }
        Ok(())
    }
}
