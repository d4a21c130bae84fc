//! Email adapters - Implementations of the ResultMailer port.

mod mock_mailer;
mod resend_mailer;

pub use mock_mailer::{MockMailer, SentMail};
pub use resend_mailer::ResendMailer;
