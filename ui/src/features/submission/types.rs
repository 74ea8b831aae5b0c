// Core types for the observation form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// One classroom observation as entered on screen.
///
/// The Rust field names double as the JSON keys the sheet endpoint receives,
/// so renaming a field here changes the wire format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ObservationRecord {
    pub teacher_name: String,
    pub teacher_email: String,
    pub grade_level: String,
    pub subject: String,
    pub lesson_topic: String,
    pub observation_date: String,
    pub time_in: String,
    pub time_out: String,
    pub observation_notes: String,
}

/// Identifies one field of the observation record.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObservationField {
    TeacherName,
    TeacherEmail,
    GradeLevel,
    Subject,
    LessonTopic,
    ObservationDate,
    TimeIn,
    TimeOut,
    ObservationNotes,
}

impl ObservationField {
    /// All nine fields in display order.
    pub const ALL: [ObservationField; 9] = [
        ObservationField::TeacherName,
        ObservationField::TeacherEmail,
        ObservationField::GradeLevel,
        ObservationField::Subject,
        ObservationField::LessonTopic,
        ObservationField::ObservationDate,
        ObservationField::TimeIn,
        ObservationField::TimeOut,
        ObservationField::ObservationNotes,
    ];

    /// Wire name of the field, identical to the serde field name.
    pub fn name(&self) -> &'static str {
        match self {
            ObservationField::TeacherName => "teacher_name",
            ObservationField::TeacherEmail => "teacher_email",
            ObservationField::GradeLevel => "grade_level",
            ObservationField::Subject => "subject",
            ObservationField::LessonTopic => "lesson_topic",
            ObservationField::ObservationDate => "observation_date",
            ObservationField::TimeIn => "time_in",
            ObservationField::TimeOut => "time_out",
            ObservationField::ObservationNotes => "observation_notes",
        }
    }
}

impl ObservationRecord {
    /// Returns a fresh record with `field` replaced and every other field
    /// carried over unchanged.
    pub fn with_field(&self, field: ObservationField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ObservationField::TeacherName => next.teacher_name = value,
            ObservationField::TeacherEmail => next.teacher_email = value,
            ObservationField::GradeLevel => next.grade_level = value,
            ObservationField::Subject => next.subject = value,
            ObservationField::LessonTopic => next.lesson_topic = value,
            ObservationField::ObservationDate => next.observation_date = value,
            ObservationField::TimeIn => next.time_in = value,
            ObservationField::TimeOut => next.time_out = value,
            ObservationField::ObservationNotes => next.observation_notes = value,
        }
        next
    }

    pub fn get(&self, field: ObservationField) -> &str {
        match field {
            ObservationField::TeacherName => &self.teacher_name,
            ObservationField::TeacherEmail => &self.teacher_email,
            ObservationField::GradeLevel => &self.grade_level,
            ObservationField::Subject => &self.subject,
            ObservationField::LessonTopic => &self.lesson_topic,
            ObservationField::ObservationDate => &self.observation_date,
            ObservationField::TimeIn => &self.time_in,
            ObservationField::TimeOut => &self.time_out,
            ObservationField::ObservationNotes => &self.observation_notes,
        }
    }
}

/// Where the submission flow currently stands.
///
/// The blocking overlay renders only while the phase is `Submitting`, so
/// reaching either terminal phase is what releases the UI again. Both the
/// success banner and the failure banner are driven from here as well; there
/// is no other submission status anywhere in the app.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting(String),
    Success,
    Failed(String),
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting(_))
    }

    /// The progress message shown in the overlay, if one is active.
    pub fn progress_message(&self) -> Option<&str> {
        match self {
            SubmissionPhase::Submitting(message) => Some(message),
            _ => None,
        }
    }
}

/// Ordered steps of the submission pipeline. The order is load-bearing: the
/// sheet row must be written before the email goes out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionStep {
    SaveSheet,
    RenderReport,
    SendEmail,
}

impl SubmissionStep {
    pub const ORDER: [SubmissionStep; 3] = [
        SubmissionStep::SaveSheet,
        SubmissionStep::RenderReport,
        SubmissionStep::SendEmail,
    ];

    /// Human-readable message shown in the overlay while this step runs.
    pub fn progress_message(&self) -> &'static str {
        match self {
            SubmissionStep::SaveSheet => "Saving sheet data...",
            SubmissionStep::RenderReport => "Preparing report...",
            SubmissionStep::SendEmail => "Sending email...",
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum FormAction {
    SetField(ObservationField, String),
    SetPhase(SubmissionPhase),
}

#[derive(Clone, Default)]
pub struct ObservationFormState {
    pub record: ObservationRecord,
    pub phase: SubmissionPhase,
}

impl ObservationFormState {
    /// Reduces the state based on an action
    pub fn reduce(mut self, action: FormAction) -> Self {
        match action {
            FormAction::SetField(field, value) => {
                self.record = self.record.with_field(field, value);
            }
            FormAction::SetPhase(phase) => {
                self.phase = phase;
            }
        }
        self
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: FormAction) {
        match action {
            FormAction::SetField(field, value) => {
                self.record = self.record.with_field(field, value);
            }
            FormAction::SetPhase(phase) => {
                self.phase = phase;
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn succeeded(&self) -> bool {
        self.phase == SubmissionPhase::Success
    }

    pub fn failure_message(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_field_replaces_only_the_named_field() {
        let base = ObservationRecord {
            teacher_name: "A. Lee".to_string(),
            teacher_email: "a.lee@example.edu".to_string(),
            grade_level: "5".to_string(),
            subject: "Math".to_string(),
            lesson_topic: "Fractions".to_string(),
            observation_date: "2024-03-01".to_string(),
            time_in: "09:00".to_string(),
            time_out: "09:45".to_string(),
            observation_notes: "Engaged class.".to_string(),
        };

        for field in ObservationField::ALL {
            let updated = base.with_field(field, "changed".to_string());
            assert_eq!(updated.get(field), "changed");

            for other in ObservationField::ALL {
                if other != field {
                    assert_eq!(updated.get(other), base.get(other));
                }
            }
            // The original record is untouched
            assert_ne!(base.get(field), "changed");
        }
    }

    #[test]
    fn test_edit_sequence_keeps_last_value_per_field() {
        let mut state = ObservationFormState::default();
        state = state.reduce(FormAction::SetField(
            ObservationField::TeacherName,
            "first".to_string(),
        ));
        state = state.reduce(FormAction::SetField(
            ObservationField::Subject,
            "Science".to_string(),
        ));
        state = state.reduce(FormAction::SetField(
            ObservationField::TeacherName,
            "second".to_string(),
        ));

        assert_eq!(state.record.teacher_name, "second");
        assert_eq!(state.record.subject, "Science");
        assert_eq!(state.record.grade_level, "");
    }

    #[test]
    fn test_reduce_and_reduce_in_place_agree() {
        let actions = vec![
            FormAction::SetField(ObservationField::LessonTopic, "Fractions".to_string()),
            FormAction::SetPhase(SubmissionPhase::Submitting("Saving...".to_string())),
            FormAction::SetPhase(SubmissionPhase::Success),
        ];

        let mut consumed = ObservationFormState::default();
        let mut in_place = ObservationFormState::default();
        for action in actions {
            consumed = consumed.reduce(action.clone());
            in_place.reduce_in_place(action);
        }

        assert_eq!(consumed.record, in_place.record);
        assert_eq!(consumed.phase, in_place.phase);
    }

    #[test]
    fn test_phase_starts_idle_and_tracks_overlay_visibility() {
        let state = ObservationFormState::default();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(!state.is_submitting());

        let submitting = state.reduce(FormAction::SetPhase(SubmissionPhase::Submitting(
            "Saving sheet data...".to_string(),
        )));
        assert!(submitting.is_submitting());
        assert_eq!(
            submitting.phase.progress_message(),
            Some("Saving sheet data...")
        );

        // Both terminal phases clear the overlay
        let failed = submitting
            .clone()
            .reduce(FormAction::SetPhase(SubmissionPhase::Failed(
                "network down".to_string(),
            )));
        assert!(!failed.is_submitting());
        assert_eq!(failed.failure_message(), Some("network down"));

        let success = submitting.reduce(FormAction::SetPhase(SubmissionPhase::Success));
        assert!(!success.is_submitting());
        assert!(success.succeeded());
    }

    #[test]
    fn test_pipeline_step_order_and_messages() {
        assert_eq!(
            SubmissionStep::ORDER,
            [
                SubmissionStep::SaveSheet,
                SubmissionStep::RenderReport,
                SubmissionStep::SendEmail,
            ]
        );
        assert_eq!(
            SubmissionStep::SaveSheet.progress_message(),
            "Saving sheet data..."
        );
        assert_eq!(
            SubmissionStep::RenderReport.progress_message(),
            "Preparing report..."
        );
        assert_eq!(
            SubmissionStep::SendEmail.progress_message(),
            "Sending email..."
        );
    }

    #[test]
    fn test_field_names_match_wire_keys() {
        let record = ObservationRecord::default();
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), ObservationField::ALL.len());
        for field in ObservationField::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
    }
}
