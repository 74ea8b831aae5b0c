//! Report generation: canvas capture plus PDF composition.

pub mod canvas;
pub mod pdf;

pub use canvas::{render_report_image, ReportImage};
pub use pdf::compose_report_pdf;
