//! User Interface Components
//!
//! Reusable Dioxus components for the observation form tool:
//!
//! - **forms**: the observation form with its card sections and submit gating
//! - **display**: blocking overlay and submission status banners
//! - **inputs**: validated input fields and form controls

pub mod display;
pub mod forms;
pub mod inputs;
