//! Resend mail adapter.
//!
//! Implements the `ResultMailer` port over the Resend HTTP API. The API key
//! is taken from the explicit `EmailConfig` passed to the constructor and
//! held as a `secrecy::SecretString`.
//!
//! # Configuration
//!
//! ```ignore
//! let mailer = ResendMailer::new(&config.email);
//! mailer.send_result(&recipient, attachment).await?;
//! ```

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::domain::foundation::EmailAddress;
use crate::ports::{MailError, MailErrorCode, ResultAttachment, ResultMailer};

/// Plain-text body of the result email.
const RESULT_BODY: &str = "Attached is your TOPSIS result file.";

/// Resend mail adapter.
pub struct ResendMailer {
    api_key: SecretString,
    api_base_url: String,
    from_header: String,
    subject: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
    attachments: Vec<AttachmentPayload>,
}

#[derive(Debug, Serialize)]
struct AttachmentPayload {
    filename: String,
    content: String,
    content_type: String,
}

impl ResendMailer {
    /// Create a new mailer from email configuration.
    pub fn new(config: &EmailConfig) -> Self {
        Self {
            api_key: SecretString::new(config.resend_api_key.clone()),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            from_header: config.from_header(),
            subject: config.subject.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_base_url)
    }

    fn build_request<'a>(
        &'a self,
        recipient: &'a EmailAddress,
        attachment: ResultAttachment,
    ) -> SendEmailRequest<'a> {
        SendEmailRequest {
            from: &self.from_header,
            to: vec![recipient.as_str()],
            subject: &self.subject,
            text: RESULT_BODY,
            attachments: vec![AttachmentPayload {
                filename: attachment.filename,
                content: STANDARD.encode(&attachment.content),
                content_type: attachment.content_type,
            }],
        }
    }
}

/// Maps a non-success HTTP status to a mail error.
fn status_error(status: reqwest::StatusCode, body: &str) -> MailError {
    let code = match status.as_u16() {
        401 | 403 => MailErrorCode::AuthenticationError,
        429 => MailErrorCode::RateLimitExceeded,
        400..=499 => MailErrorCode::Rejected,
        _ => MailErrorCode::Unknown,
    };
    MailError::new(code, format!("Resend returned {}: {}", status, body))
        .with_provider_status(status.as_u16())
}

#[async_trait]
impl ResultMailer for ResendMailer {
    async fn send_result(
        &self,
        recipient: &EmailAddress,
        attachment: ResultAttachment,
    ) -> Result<(), MailError> {
        let filename = attachment.filename.clone();
        let request = self.build_request(recipient, attachment);

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach Resend: {}", e);
                MailError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Resend rejected result email");
            return Err(status_error(status, &body));
        }

        tracing::debug!(%recipient, %filename, "Result email accepted by Resend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    fn config(base_url: &str) -> EmailConfig {
        EmailConfig {
            resend_api_key: "re_test_key".to_string(),
            api_base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    fn recipient() -> EmailAddress {
        EmailAddress::try_new("analyst@example.com").unwrap()
    }

    /// Starts a fake Resend endpoint that records the request body.
    async fn fake_resend(
        status: StatusCode,
    ) -> (String, Arc<Mutex<Option<(String, serde_json::Value)>>>) {
        let captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();
        let app = Router::new().route(
            "/emails",
            post(
                move |headers: axum::http::HeaderMap, Json(body): Json<serde_json::Value>| {
                    let sink = sink.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string();
                        *sink.lock().unwrap() = Some((auth, body));
                        (status, Json(serde_json::json!({ "id": "email_123" })))
                    }
                },
            ),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), captured)
    }

    #[test]
    fn request_encodes_attachment_as_base64() {
        let mailer = ResendMailer::new(&config("https://api.resend.com/"));
        let to = recipient();
        let request = mailer.build_request(&to, ResultAttachment::csv("output.csv", b"a,b".to_vec()));

        assert_eq!(mailer.endpoint(), "https://api.resend.com/emails");
        assert_eq!(request.to, vec!["analyst@example.com"]);
        assert_eq!(request.subject, "TOPSIS Result");
        assert_eq!(request.text, RESULT_BODY);
        assert_eq!(request.attachments[0].content, "YSxi");
        assert_eq!(request.attachments[0].filename, "output.csv");
    }

    #[test]
    fn status_errors_are_categorized() {
        assert_eq!(
            status_error(reqwest::StatusCode::UNAUTHORIZED, "").code,
            MailErrorCode::AuthenticationError
        );
        assert_eq!(
            status_error(reqwest::StatusCode::TOO_MANY_REQUESTS, "").code,
            MailErrorCode::RateLimitExceeded
        );
        assert_eq!(
            status_error(reqwest::StatusCode::UNPROCESSABLE_ENTITY, "").code,
            MailErrorCode::Rejected
        );
        let err = status_error(reqwest::StatusCode::BAD_GATEWAY, "down");
        assert_eq!(err.code, MailErrorCode::Unknown);
        assert_eq!(err.provider_status, Some(502));
    }

    #[tokio::test]
    async fn sends_result_with_bearer_key() {
        let (base_url, captured) = fake_resend(StatusCode::OK).await;
        let mailer = ResendMailer::new(&config(&base_url));

        mailer
            .send_result(&recipient(), ResultAttachment::csv("output.csv", b"x".to_vec()))
            .await
            .unwrap();

        let (auth, body) = captured.lock().unwrap().clone().unwrap();
        assert_eq!(auth, "Bearer re_test_key");
        assert_eq!(body["to"][0], "analyst@example.com");
        assert_eq!(body["attachments"][0]["filename"], "output.csv");
    }

    #[tokio::test]
    async fn provider_rejection_is_reported() {
        let (base_url, _captured) = fake_resend(StatusCode::FORBIDDEN).await;
        let mailer = ResendMailer::new(&config(&base_url));

        let err = mailer
            .send_result(&recipient(), ResultAttachment::csv("output.csv", Vec::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, MailErrorCode::AuthenticationError);
        assert_eq!(err.provider_status, Some(403));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_network_error() {
        let mailer = ResendMailer::new(&config("http://127.0.0.1:1"));
        let err = mailer
            .send_result(&recipient(), ResultAttachment::csv("output.csv", Vec::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, MailErrorCode::NetworkError);
    }
}
