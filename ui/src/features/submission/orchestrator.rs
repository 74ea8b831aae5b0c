//! Submission orchestrator - coordinates the ordered submission steps

use dioxus::prelude::*;
use gloo_console as console;

use crate::features::submission::types::*;
use crate::services::client::{EmailClient, SheetsClient, SubmissionError};
use crate::services::config::EndpointConfig;
use crate::services::report::{compose_report_pdf, render_report_image};

/// Runs the full submission pipeline for one record and reports the outcome
/// through `dispatch`.
///
/// Any failure aborts the remaining steps and lands in `Failed`; both
/// terminal phases leave `Submitting`, which is what hides the overlay, so
/// the UI is released on every exit path. Nothing is rolled back: a sheet
/// row written before a later failure stays written, and resubmitting
/// re-runs the whole pipeline.
pub async fn execute_submission(record: ObservationRecord, dispatch: EventHandler<FormAction>) {
    console::info!("[Submission] Starting submission pipeline");

    match execute_full_submission(&record, &dispatch).await {
        Ok(()) => {
            console::info!("[Submission] Submission completed successfully");
            dispatch.call(FormAction::SetPhase(SubmissionPhase::Success));
        }
        Err(e) => {
            console::error!("[Submission] Submission failed: {}", e.to_string());
            dispatch.call(FormAction::SetPhase(SubmissionPhase::Failed(e.to_string())));
        }
    }
}

async fn execute_full_submission(
    record: &ObservationRecord,
    dispatch: &EventHandler<FormAction>,
) -> Result<(), SubmissionError> {
    let config = EndpointConfig::from_build_env();

    // Step 1: Persist the record to the spreadsheet endpoint
    advance(dispatch, SubmissionStep::SaveSheet);
    let sheets = SheetsClient::new(config.sheets_api_url);
    sheets.append_record(record).await?;

    // Step 2: Capture the report region and compose the one-page PDF
    advance(dispatch, SubmissionStep::RenderReport);
    let image = render_report_image(record)?;
    let pdf = compose_report_pdf(&image.data, image.width_px, image.height_px);

    // Step 3: Email the PDF to the teacher
    advance(dispatch, SubmissionStep::SendEmail);
    let email = EmailClient::new(config.email_api_url);
    email.send_report(&record.teacher_email, pdf).await?;

    Ok(())
}

fn advance(dispatch: &EventHandler<FormAction>, step: SubmissionStep) {
    console::info!("[Submission] Step: {}", step.progress_message());
    dispatch.call(FormAction::SetPhase(SubmissionPhase::Submitting(
        step.progress_message().to_string(),
    )));
}
