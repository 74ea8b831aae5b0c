use dioxus::prelude::*;

use crate::components::display::{ErrorBanner, LoadingOverlay, SuccessBanner};
use crate::components::forms::ObservationDetailsForm;
use crate::features::submission::{FormAction, ObservationFormState, SubmissionPhase};

/// The observation form screen. Owns the form state for its lifetime; the
/// record is created empty on mount, mutated through dispatched actions, and
/// discarded when the screen unmounts.
#[component]
pub fn ClassroomObservationForm() -> Element {
    // Consolidated state management
    let mut state = use_signal(ObservationFormState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: FormAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let phase = state().phase;

    rsx! {
        div {
            class: "observation-container container py-5",
            style: "background: linear-gradient(135deg, #e6f3e6 0%, #e0f7fa 100%); min-height: 100vh;",

            div {
                class: "mx-auto",
                style: "max-width: 700px;",

                h2 {
                    class: "mb-4 text-center display-6 text-success",
                    "📝 Classroom Observation"
                }

                if phase == SubmissionPhase::Success {
                    SuccessBanner {}
                } else if let SubmissionPhase::Failed(message) = phase.clone() {
                    ErrorBanner { message }
                }

                ObservationDetailsForm {
                    state: state,
                    dispatch: dispatch
                }
            }

            if let SubmissionPhase::Submitting(message) = phase {
                LoadingOverlay { message }
            }
        }
    }
}
