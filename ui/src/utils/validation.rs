use crate::features::submission::types::ObservationFormState;

#[derive(Clone, PartialEq, Debug)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

impl ObservationFormState {
    pub fn validate_email(&self) -> EmailValidation {
        let email = self.record.teacher_email.trim();
        if email.is_empty() {
            return EmailValidation::None;
        }

        // Basic email validation: must contain exactly one @ and at least one . after @
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return EmailValidation::Invalid;
        }

        let local_part = parts[0];
        let domain_part = parts[1];

        // Local part should not be empty and domain should contain at least one dot
        if !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2 {
            EmailValidation::Valid
        } else {
            EmailValidation::Invalid
        }
    }
}

pub fn email_validation_class(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "input-field input-valid",
        EmailValidation::Invalid => "input-field input-invalid",
        _ => "input-field",
    }
}

pub fn email_validation_style(validation: &EmailValidation) -> &'static str {
    match validation {
        EmailValidation::Valid => "border: 2px solid #10b981; background-color: #f0fdf4;",
        EmailValidation::Invalid => "border: 2px solid #ef4444; background-color: #fef2f2;",
        _ => "",
    }
}
