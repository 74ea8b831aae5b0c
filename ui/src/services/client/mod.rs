//! HTTP clients for the externally-owned sheet and email endpoints.

pub mod email;
pub mod errors;
pub mod sheets;

pub use email::{EmailClient, REPORT_FILE_NAME, REPORT_SUBJECT};
pub use errors::{SubmissionError, SubmissionResult};
pub use sheets::SheetsClient;
