//! Input components for form entry and validation display

use dioxus::prelude::*;

use crate::utils::validation::EmailValidation;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Date,
    Time,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Date => "date",
            InputType::Time => "time",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub input_style: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: true,
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectInputProps {
    pub value: String,
    pub prompt: String,
    /// (value, label) pairs in display order.
    pub options: Vec<(String, String)>,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SelectInput(props: SelectInputProps) -> Element {
    let selected = props.value;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "form-select",
            required: true,
            disabled: props.disabled,
            value: "{selected}",
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            option {
                value: "",
                "{props.prompt}"
            }
            for (value, label) in props.options {
                option {
                    value: "{value}",
                    selected: value == selected,
                    "{label}"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct NotesInputProps {
    pub value: String,
    pub placeholder: String,
    pub rows: u32,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn NotesInput(props: NotesInputProps) -> Element {
    rsx! {
        textarea {
            class: "form-control",
            rows: "{props.rows}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: true,
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct EmailValidationFeedbackProps {
    pub validation: EmailValidation,
}

#[component]
pub fn EmailValidationFeedback(props: EmailValidationFeedbackProps) -> Element {
    match props.validation {
        EmailValidation::Valid => rsx! {
            div {
                class: "validation-feedback valid",
                style: "color: #10b981; background-color: #d1fae5; border: 1px solid #10b981; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "✓ Valid email address"
            }
        },
        EmailValidation::Invalid => rsx! {
            div {
                class: "validation-feedback invalid",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ Please enter a valid email address"
            }
        },
        _ => rsx! { div {} },
    }
}
