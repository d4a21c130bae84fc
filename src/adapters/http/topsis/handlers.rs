//! HTTP handlers for TOPSIS endpoints.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::application::handlers::topsis::RunTopsisHandler;
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{ErrorResponse, HealthResponse, TopsisForm, TopsisRunResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TopsisHandlers {
    run_handler: Arc<RunTopsisHandler>,
}

impl TopsisHandlers {
    pub fn new(run_handler: Arc<RunTopsisHandler>) -> Self {
        Self { run_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/topsis - Score an uploaded CSV and optionally email the result
pub async fn run_topsis(State(handlers): State<TopsisHandlers>, multipart: Multipart) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };
    let cmd = match form.into_command() {
        Ok(cmd) => cmd,
        Err(error) => return (StatusCode::BAD_REQUEST, Json(error)).into_response(),
    };

    match handlers.run_handler.handle(cmd).await {
        Ok(result) => {
            let response = TopsisRunResponse::from(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/topsis/download - Score an uploaded CSV and return the result file
pub async fn download_result(
    State(handlers): State<TopsisHandlers>,
    multipart: Multipart,
) -> Response {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };
    let mut cmd = match form.into_command() {
        Ok(cmd) => cmd,
        Err(error) => return (StatusCode::BAD_REQUEST, Json(error)).into_response(),
    };
    cmd.send_mail = false;

    match handlers.run_handler.handle(cmd).await {
        Ok(result) => {
            let disposition = format!("attachment; filename=\"{}\"", result.download_name);
            let disposition = match HeaderValue::from_str(&disposition) {
                Ok(value) => value,
                Err(_) => HeaderValue::from_static("attachment; filename=\"output.csv\""),
            };
            (
                StatusCode::OK,
                [
                    (
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/csv; charset=utf-8"),
                    ),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                result.csv,
            )
                .into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /health - Liveness check
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Form parsing
// ════════════════════════════════════════════════════════════════════════════

async fn read_form(mut multipart: Multipart) -> Result<TopsisForm, Response> {
    let mut form = TopsisForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(multipart_error(e.status(), e.body_text())),
        };

        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            form.file_name = field.file_name().map(str::to_string);
            match field.bytes().await {
                Ok(bytes) => form.file = Some(bytes.to_vec()),
                Err(e) => return Err(multipart_error(e.status(), e.body_text())),
            }
            continue;
        }

        let text = match field.text().await {
            Ok(text) => text,
            Err(e) => return Err(multipart_error(e.status(), e.body_text())),
        };
        match name.as_str() {
            "weights" => form.weights = Some(text),
            "impacts" => form.impacts = Some(text),
            "email" => form.email = Some(text),
            "send_mail" => form.send_mail = Some(text),
            _ => {}
        }
    }

    Ok(form)
}

fn multipart_error(status: StatusCode, message: String) -> Response {
    warn!(%status, "Rejected multipart body: {}", message);
    let body = if status == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorResponse::payload_too_large("Upload exceeds the size limit")
    } else {
        ErrorResponse::bad_request(format!("Invalid form data: {}", message))
    };
    (status, Json(body)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::DegenerateInput => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!("TOPSIS request failed: {}", error);
        return (status, Json(ErrorResponse::internal(error.message))).into_response();
    }
    (status, Json(ErrorResponse::from(error))).into_response()
}
