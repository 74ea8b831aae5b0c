use dioxus::prelude::*;
use ui::ClassroomObservationForm;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/observation")]
    Observation {},
}

/// Form-selection menu. Only the observation form is mounted today; the
/// other entries are placeholders for forms that have not been built yet,
/// so their paths intentionally resolve to nothing.
#[component]
fn Home() -> Element {
    let placeholders = [
        ("Quiz Feedback", "/quiz"),
        ("Student Survey", "/survey"),
        ("Teacher Evaluation", "/evaluation"),
    ];

    rsx! {
        div {
            class: "container py-5",
            h1 {
                class: "text-center mb-4",
                "Select a Form"
            }
            div {
                class: "row gy-4",
                div {
                    class: "col-md-6 col-lg-3",
                    Link {
                        to: Route::Observation {},
                        class: "card text-center h-100 text-decoration-none shadow-sm",
                        div {
                            class: "card-body d-flex flex-column justify-content-center",
                            h5 {
                                class: "card-title text-success",
                                "Classroom Observation"
                            }
                        }
                    }
                }
                for (name, path) in placeholders {
                    div {
                        class: "col-md-6 col-lg-3",
                        a {
                            href: "{path}",
                            class: "card text-center h-100 text-decoration-none shadow-sm",
                            div {
                                class: "card-body d-flex flex-column justify-content-center",
                                h5 {
                                    class: "card-title text-success",
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Observation() -> Element {
    rsx! {
        div {
            ClassroomObservationForm {}
        }
    }
}
