//! This crate contains all shared UI components for the observation form tool.

pub mod app;
pub use app::ClassroomObservationForm;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
