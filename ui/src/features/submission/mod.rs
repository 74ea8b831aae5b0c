pub mod form_validation;
pub mod orchestrator;
pub mod types;

pub use form_validation::*;
pub use orchestrator::execute_submission;
pub use types::*;
