use crate::features::submission::types::*;
use crate::utils::validation::EmailValidation;

/// Validates that every field of the record is filled and the teacher email
/// is well-formed. The submit button stays disabled until this passes, so no
/// network call can start for an incomplete record.
pub fn validate_record_complete(state: &ObservationFormState) -> bool {
    ObservationField::ALL
        .iter()
        .all(|field| !state.record.get(*field).trim().is_empty())
        && state.validate_email() == EmailValidation::Valid
}

/// Gets user-friendly validation message for the current form state
pub fn get_validation_message(state: &ObservationFormState) -> Option<String> {
    if state.record.teacher_name.trim().is_empty() {
        return Some("Please enter the teacher's name".to_string());
    }

    if state.record.teacher_email.trim().is_empty() {
        return Some("Please enter the teacher's email address".to_string());
    }

    if state.validate_email() == EmailValidation::Invalid {
        return Some("Please enter a valid email address".to_string());
    }

    if state.record.grade_level.trim().is_empty() {
        return Some("Please select a grade level".to_string());
    }

    if state.record.subject.trim().is_empty() {
        return Some("Please select a subject".to_string());
    }

    if state.record.lesson_topic.trim().is_empty() {
        return Some("Please enter the lesson topic".to_string());
    }

    if state.record.observation_date.trim().is_empty() {
        return Some("Please pick the observation date".to_string());
    }

    if state.record.time_in.trim().is_empty() || state.record.time_out.trim().is_empty() {
        return Some("Please fill in the time in and time out".to_string());
    }

    if state.record.observation_notes.trim().is_empty() {
        return Some("Please enter the observation notes".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> ObservationFormState {
        let mut state = ObservationFormState::default();
        state.record.teacher_name = "A. Lee".to_string();
        state.record.teacher_email = "a.lee@example.edu".to_string();
        state.record.grade_level = "5".to_string();
        state.record.subject = "Math".to_string();
        state.record.lesson_topic = "Fractions".to_string();
        state.record.observation_date = "2024-03-01".to_string();
        state.record.time_in = "09:00".to_string();
        state.record.time_out = "09:45".to_string();
        state.record.observation_notes = "Engaged class.".to_string();
        state
    }

    #[test]
    fn test_validate_record_complete() {
        let state = ObservationFormState::default();

        // Should be false with empty fields
        assert!(!validate_record_complete(&state));

        // Should be true with all fields filled and a valid email
        let state = filled_state();
        assert!(validate_record_complete(&state));

        // Any single blank field blocks submission
        for field in ObservationField::ALL {
            let mut incomplete = filled_state();
            incomplete.record = incomplete.record.with_field(field, "  ".to_string());
            assert!(!validate_record_complete(&incomplete), "{}", field.name());
        }
    }

    #[test]
    fn test_malformed_email_blocks_submission() {
        let mut state = filled_state();
        state.record.teacher_email = "not-an-email".to_string();
        assert!(!validate_record_complete(&state));

        state.record.teacher_email = "a.lee@nodot".to_string();
        assert!(!validate_record_complete(&state));
    }

    #[test]
    fn test_validation_message_points_at_first_gap() {
        let mut state = ObservationFormState::default();
        assert_eq!(
            get_validation_message(&state),
            Some("Please enter the teacher's name".to_string())
        );

        state.record.teacher_name = "A. Lee".to_string();
        state.record.teacher_email = "bad".to_string();
        assert_eq!(
            get_validation_message(&state),
            Some("Please enter a valid email address".to_string())
        );

        let complete = filled_state();
        assert_eq!(get_validation_message(&complete), None);
    }
}
