use dioxus::prelude::*;

/// Confirmation banner rendered once the pipeline reaches `Success`.
#[component]
pub fn SuccessBanner() -> Element {
    rsx! {
        div {
            class: "alert alert-success d-flex align-items-center",
            role: "alert",
            "Success! Report emailed to the teacher."
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Failure banner carrying the pipeline error text. Replaces the blocking
/// alert pop-up; the form below it stays editable for a manual retry.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            class: "alert alert-danger d-flex align-items-center",
            role: "alert",
            "Error: {props.message}"
        }
    }
}
