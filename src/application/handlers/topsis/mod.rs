//! TOPSIS scoring command handlers.

mod file_names;
mod run_topsis;

pub use file_names::{result_file_name, sanitize_file_name, DEFAULT_RESULT_FILE_NAME};
pub use run_topsis::{
    RunTopsisCommand, RunTopsisHandler, RunTopsisResult, EMAIL_NOT_CONFIGURED, EMAIL_SEND_FAILED,
};
