//! HTTP adapters - REST API implementations.

mod router;
pub mod topsis;

pub use router::app_router;
pub use topsis::{topsis_routes, TopsisHandlers};
