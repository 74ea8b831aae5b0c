pub mod observation_details_form;

pub use observation_details_form::*;
