//! Infrastructure Services
//!
//! This module provides the core infrastructure services for the form tool:
//!
//! - **client**: HTTP clients for the sheet and email endpoints
//! - **config**: build-time endpoint configuration
//! - **report**: canvas capture and PDF composition for the emailed report
//!
//! The services are WASM-first, using browser APIs through web-sys and
//! async without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
pub mod report;
