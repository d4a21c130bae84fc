//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! ranking domain.

mod email_address;
mod errors;

pub use email_address::EmailAddress;
pub use errors::{DomainError, ErrorCode, ValidationError};
