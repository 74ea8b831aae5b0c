use dioxus::prelude::*;

use crate::components::inputs::{
    EmailValidationFeedback, InputType, NotesInput, SelectInput, ValidatedInput,
};
use crate::console_info;
use crate::features::submission::{
    execute_submission, get_validation_message, validate_record_complete, FormAction,
    ObservationField, ObservationFormState, SubmissionPhase,
};
use crate::utils::validation::{email_validation_class, email_validation_style};

const GRADES: [&str; 13] = [
    "K", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
const SUBJECTS: [&str; 8] = [
    "Math", "Science", "ELA", "History", "Art", "Music", "PE", "Elective",
];

#[derive(Props, PartialEq, Clone)]
pub struct ObservationDetailsFormProps {
    pub state: Signal<ObservationFormState>,
    pub dispatch: EventHandler<FormAction>,
}

#[component]
pub fn ObservationDetailsForm(props: ObservationDetailsFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let grade_options: Vec<(String, String)> = GRADES
        .iter()
        .map(|grade| (grade.to_string(), format!("Grade {grade}")))
        .collect();
    let subject_options: Vec<(String, String)> = SUBJECTS
        .iter()
        .map(|subject| (subject.to_string(), subject.to_string()))
        .collect();

    rsx! {
        // Teacher Information
        div {
            class: "card mb-4 shadow-sm",
            div {
                class: "card-header bg-success text-white",
                "👤 Teacher Information"
            }
            div {
                class: "card-body",
                div {
                    class: "mb-3",
                    ValidatedInput {
                        value: state().record.teacher_name,
                        placeholder: "Teacher's Name".to_string(),
                        input_type: InputType::Text,
                        input_class: "form-control".to_string(),
                        input_style: "".to_string(),
                        disabled: state().is_submitting(),
                        on_change: move |value: String| {
                            dispatch.call(FormAction::SetField(ObservationField::TeacherName, value));
                        }
                    }
                }
                div {
                    class: "mb-3",
                    ValidatedInput {
                        value: state().record.teacher_email,
                        placeholder: "Teacher's Email".to_string(),
                        input_type: InputType::Email,
                        input_class: format!("form-control {}", email_validation_class(&state().validate_email())),
                        input_style: email_validation_style(&state().validate_email()).to_string(),
                        disabled: state().is_submitting(),
                        on_change: move |value: String| {
                            dispatch.call(FormAction::SetField(ObservationField::TeacherEmail, value));
                        }
                    }
                    EmailValidationFeedback {
                        validation: state().validate_email()
                    }
                }
            }
        }

        // Class Details
        div {
            class: "card mb-4 shadow-sm",
            div {
                class: "card-header bg-info text-white",
                "📅 Class Details"
            }
            div {
                class: "card-body",
                div {
                    class: "row g-3",
                    div {
                        class: "col-md-6",
                        label { class: "form-label", "Grade Level" }
                        SelectInput {
                            value: state().record.grade_level,
                            prompt: "Select Grade".to_string(),
                            options: grade_options,
                            disabled: state().is_submitting(),
                            on_change: move |value: String| {
                                dispatch.call(FormAction::SetField(ObservationField::GradeLevel, value));
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        label { class: "form-label", "Subject" }
                        SelectInput {
                            value: state().record.subject,
                            prompt: "Select Subject".to_string(),
                            options: subject_options,
                            disabled: state().is_submitting(),
                            on_change: move |value: String| {
                                dispatch.call(FormAction::SetField(ObservationField::Subject, value));
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        label { class: "form-label", "Lesson Topic" }
                        ValidatedInput {
                            value: state().record.lesson_topic,
                            placeholder: "Lesson Topic".to_string(),
                            input_type: InputType::Text,
                            input_class: "form-control".to_string(),
                            input_style: "".to_string(),
                            disabled: state().is_submitting(),
                            on_change: move |value: String| {
                                dispatch.call(FormAction::SetField(ObservationField::LessonTopic, value));
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        label { class: "form-label", "Observation Date" }
                        ValidatedInput {
                            value: state().record.observation_date,
                            placeholder: "".to_string(),
                            input_type: InputType::Date,
                            input_class: "form-control".to_string(),
                            input_style: "".to_string(),
                            disabled: state().is_submitting(),
                            on_change: move |value: String| {
                                dispatch.call(FormAction::SetField(ObservationField::ObservationDate, value));
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        label { class: "form-label", "Time In" }
                        ValidatedInput {
                            value: state().record.time_in,
                            placeholder: "".to_string(),
                            input_type: InputType::Time,
                            input_class: "form-control".to_string(),
                            input_style: "".to_string(),
                            disabled: state().is_submitting(),
                            on_change: move |value: String| {
                                dispatch.call(FormAction::SetField(ObservationField::TimeIn, value));
                            }
                        }
                    }
                    div {
                        class: "col-md-6",
                        label { class: "form-label", "Time Out" }
                        ValidatedInput {
                            value: state().record.time_out,
                            placeholder: "".to_string(),
                            input_type: InputType::Time,
                            input_class: "form-control".to_string(),
                            input_style: "".to_string(),
                            disabled: state().is_submitting(),
                            on_change: move |value: String| {
                                dispatch.call(FormAction::SetField(ObservationField::TimeOut, value));
                            }
                        }
                    }
                }
            }
        }

        // Observation Notes
        div {
            class: "card mb-4 shadow-sm",
            div {
                class: "card-header bg-warning text-dark",
                "📝 Observation Notes"
            }
            div {
                class: "card-body",
                NotesInput {
                    value: state().record.observation_notes,
                    placeholder: "Enter detailed notes...".to_string(),
                    rows: 6,
                    disabled: state().is_submitting(),
                    on_change: move |value: String| {
                        dispatch.call(FormAction::SetField(ObservationField::ObservationNotes, value));
                    }
                }
            }
        }

        // Submit
        div {
            class: "text-center",
            button {
                class: "btn btn-lg btn-success shadow-sm px-5 py-2",
                disabled: {
                    let current_state = state();
                    current_state.is_submitting() || !validate_record_complete(&current_state)
                },
                onclick: move |_| {
                    let current_state = state();
                    console_info!("[Form] Submitting observation record");
                    dispatch.call(FormAction::SetPhase(SubmissionPhase::Submitting(
                        "Submitting your form...".to_string(),
                    )));
                    spawn(execute_submission(current_state.record, dispatch));
                },
                if state().is_submitting() {
                    "Submitting..."
                } else {
                    "Submit ✉️"
                }
            }
        }

        div {
            class: "submission-info text-center mt-3",
            if state().is_submitting() {
                // Progress lives in the blocking overlay
            } else if let Some(message) = get_validation_message(&state()) {
                div {
                    class: "validation-error text-muted",
                    "⚠️ {message}"
                }
            }
        }
    }
}
