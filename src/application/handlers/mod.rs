//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod topsis;

pub use topsis::{RunTopsisCommand, RunTopsisHandler, RunTopsisResult};
