use reqwest::Client;
use tracing::instrument;

use super::errors::{SubmissionError, SubmissionResult};
use crate::features::submission::types::ObservationRecord;

/// Client for the spreadsheet-backed data-capture endpoint.
#[derive(Clone)]
pub struct SheetsClient {
    http_client: Client,
    endpoint_url: String,
}

impl SheetsClient {
    /// Create a new sheets client
    pub fn new(endpoint_url: String) -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("classroom-observation-forms/1.0")
                .build()
                .expect("Failed to create HTTP client"),
            endpoint_url,
        }
    }

    /// Appends one observation as a new row. The body is the record as JSON,
    /// keyed exactly by the nine field names. The response is not inspected
    /// beyond transport-level success, matching what the endpoint promises.
    #[instrument(skip(self, record), err)]
    pub async fn append_record(&self, record: &ObservationRecord) -> SubmissionResult<()> {
        if self.endpoint_url.is_empty() {
            return Err(SubmissionError::EndpointNotConfigured { name: "sheet" });
        }

        self.http_client
            .post(&self.endpoint_url)
            .json(record)
            .send()
            .await
            .map_err(|e| SubmissionError::Network {
                endpoint: "sheet",
                message: e.to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_to_exact_sheet_body() {
        let record = ObservationRecord {
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

        let body = serde_json::to_value(&record).unwrap();
        assert_eq!(
            body,
            json!({
                "teacher_name": "A. Lee",
                "teacher_email": "a.lee@example.edu",
                "grade_level": "5",
                "subject": "Math",
                "lesson_topic": "Fractions",
                "observation_date": "2024-03-01",
                "time_in": "09:00",
                "time_out": "09:45",
                "observation_notes": "Engaged class.",
            })
        );
    }
}
