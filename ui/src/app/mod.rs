pub mod observation_form;

pub use observation_form::ClassroomObservationForm;
