//! Error types for the submission pipeline
//!
//! One taxonomy covers everything that can go wrong between the submit click
//! and the terminal phase. Every variant carries text fit to show the user
//! directly in the failure banner.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SubmissionError {
    #[error("The {name} endpoint is not configured")]
    EndpointNotConfigured { name: &'static str },

    #[error("Request to the {endpoint} endpoint failed: {message}")]
    Network {
        endpoint: &'static str,
        message: String,
    },

    #[error("Report rendering failed: {message}")]
    Rendering { message: String },

    #[error("Report image could not be decoded: {message}")]
    ImageDecode { message: String },
}

/// Result type for submission operations
pub type SubmissionResult<T> = Result<T, SubmissionError>;
