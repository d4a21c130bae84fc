//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ResultMailer` - Delivers a rendered result file to a recipient

mod result_mailer;

pub use result_mailer::{MailError, MailErrorCode, ResultAttachment, ResultMailer};
