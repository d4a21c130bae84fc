//! HTTP adapter for TOPSIS endpoints.
//!
//! - `POST /api/topsis` - Score an uploaded CSV, optionally emailing the result
//! - `POST /api/topsis/download` - Score an uploaded CSV and return the result file

mod dto;
mod handlers;
mod routes;

pub use dto::{is_truthy, ErrorResponse, HealthResponse, TopsisForm, TopsisRunResponse};
pub use handlers::{health_check, TopsisHandlers};
pub use routes::topsis_routes;
