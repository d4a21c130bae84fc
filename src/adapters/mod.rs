//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - CSV decoding of decision matrices and encoding of results
//! - `email` - Result delivery (Resend, mock)
//! - `http` - REST API (axum)

pub mod email;
pub mod http;
pub mod table;

pub use email::{MockMailer, ResendMailer};
pub use http::{app_router, TopsisHandlers};
