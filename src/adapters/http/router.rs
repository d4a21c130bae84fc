//! Top-level router - mounts endpoints and applies middleware.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{LimitsConfig, ServerConfig};

use super::topsis::{health_check, topsis_routes, TopsisHandlers};

/// Build the full application router.
pub fn app_router(handlers: TopsisHandlers, server: &ServerConfig, limits: &LimitsConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(topsis_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(server))
                .layer(TimeoutLayer::new(server.request_timeout()))
                .layer(DefaultBodyLimit::max(limits.max_upload_bytes)),
        )
}

/// Permissive CORS unless explicit origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
