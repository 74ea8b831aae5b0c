//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: form field validation helpers
//!
//! These utilities are designed to work consistently across deployment targets.

pub mod console_macros;
pub mod validation;

pub use validation::*;
