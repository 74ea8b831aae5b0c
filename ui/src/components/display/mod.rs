pub mod loading_overlay;
pub mod status_banner;

pub use loading_overlay::*;
pub use status_banner::*;
