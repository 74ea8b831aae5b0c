use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::instrument;

use super::errors::{SubmissionError, SubmissionResult};

/// Subject line of every report email.
pub const REPORT_SUBJECT: &str = "Classroom Observation Report";
/// File name the attachment is delivered under.
pub const REPORT_FILE_NAME: &str = "report.pdf";

/// Client for the email-delivery endpoint.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    endpoint_url: String,
}

impl EmailClient {
    /// Create a new email client
    pub fn new(endpoint_url: String) -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("classroom-observation-forms/1.0")
                .build()
                .expect("Failed to create HTTP client"),
            endpoint_url,
        }
    }

    /// Sends the rendered report to `to` as a PDF attachment. One multipart
    /// POST with exactly three parts: `to`, `subject`, `attachment`.
    #[instrument(skip(self, pdf_data), err)]
    pub async fn send_report(&self, to: &str, pdf_data: Vec<u8>) -> SubmissionResult<()> {
        if self.endpoint_url.is_empty() {
            return Err(SubmissionError::EndpointNotConfigured { name: "email" });
        }

        let attachment = Part::bytes(pdf_data)
            .file_name(REPORT_FILE_NAME)
            .mime_str("application/pdf")
            .map_err(|e| SubmissionError::Network {
                endpoint: "email",
                message: e.to_string(),
            })?;

        let form = Form::new()
            .text("to", to.to_string())
            .text("subject", REPORT_SUBJECT)
            .part("attachment", attachment);

        self.http_client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::Network {
                endpoint: "email",
                message: e.to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_email_literals() {
        // These are part of the wire contract with the email endpoint.
        assert_eq!(REPORT_SUBJECT, "Classroom Observation Report");
        assert_eq!(REPORT_FILE_NAME, "report.pdf");
    }
}
