//! HTTP routes for TOPSIS endpoints.

use axum::{routing::post, Router};

use super::handlers::{download_result, run_topsis, TopsisHandlers};

/// Creates the TOPSIS router with all endpoints.
pub fn topsis_routes(handlers: TopsisHandlers) -> Router {
    Router::new()
        .route("/api/topsis", post(run_topsis))
        .route("/api/topsis/download", post(download_result))
        .with_state(handlers)
}
