use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingOverlayProps {
    pub message: String,
}

/// Full-viewport blocking overlay shown while a submission is in flight.
/// Mounting and unmounting it is driven entirely by the submission phase.
#[component]
pub fn LoadingOverlay(props: LoadingOverlayProps) -> Element {
    rsx! {
        div {
            class: "loading-overlay",
            style: "position: fixed; inset: 0; z-index: 1000; display: flex; flex-direction: column; align-items: center; justify-content: center; background: rgba(255, 255, 255, 0.8);",
            div {
                class: "spinner-border text-success",
                role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
            p {
                class: "mt-3 text-success",
                "{props.message}"
            }
        }
    }
}
