//! Completion client
//!
//! Pass-through wrapper around the remote generation-table API that
//! turns `{learning_material, study_topic}` into the four study
//! sections. One request, one response; no streaming, no retries.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use studymate_models::GenerationResult;
use studymate_utils::{CompletionConfig, StudyMateError, StudyMateResult};

pub struct CompletionClient {
    client: Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> StudyMateResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| StudyMateError::configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Submit the extracted material and topic and wait for the
    /// generated row. An accepted response with zero rows is the
    /// distinct `EmptyResponse` failure; transport and decoding
    /// failures surface as `CompletionService`.
    pub async fn generate_study_materials(
        &self,
        learning_material: &str,
        study_topic: &str,
    ) -> StudyMateResult<GenerationResult> {
        let request = RowAddRequest {
            table_id: self.config.table_id.clone(),
            data: vec![RowData {
                learning_material: learning_material.to_string(),
                study_topic: study_topic.to_string(),
            }],
            stream: false,
        };

        let response = self
            .client
            .post(format!(
                "{}/api/v1/gen_tables/action/rows/add",
                self.config.api_url
            ))
            .bearer_auth(&self.config.api_key)
            .header("X-PROJECT-ID", &self.config.project_id)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StudyMateError::completion_service(format!(
                "{}: {}",
                status, body
            )));
        }

        let completion: RowAddResponse = response
            .json()
            .await
            .map_err(|e| StudyMateError::completion_service(format!("malformed response: {}", e)))?;

        let row = completion
            .rows
            .into_iter()
            .next()
            .ok_or(StudyMateError::EmptyResponse)?;

        Ok(row.columns.into_generation_result())
    }
}

/// Row-add request for the action table.
#[derive(Debug, Serialize)]
struct RowAddRequest {
    table_id: String,
    data: Vec<RowData>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct RowData {
    learning_material: String,
    study_topic: String,
}

#[derive(Debug, Deserialize)]
struct RowAddResponse {
    #[serde(default)]
    rows: Vec<ResponseRow>,
}

#[derive(Debug, Deserialize)]
struct ResponseRow {
    #[serde(default)]
    columns: ResponseColumns,
}

/// The four generated columns; any of them may be absent.
#[derive(Debug, Default, Deserialize)]
struct ResponseColumns {
    study_plan: Option<CellText>,
    summarized_notes: Option<CellText>,
    quiz_questions: Option<CellText>,
    supplementary_resources: Option<CellText>,
}

#[derive(Debug, Deserialize)]
struct CellText {
    text: Option<String>,
}

impl ResponseColumns {
    fn into_generation_result(self) -> GenerationResult {
        GenerationResult::from_optional_fields(
            self.study_plan.and_then(|c| c.text),
            self.summarized_notes.and_then(|c| c.text),
            self.quiz_questions.and_then(|c| c.text),
            self.supplementary_resources.and_then(|c| c.text),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response_maps_all_columns_verbatim() {
        let json = r#"{
            "rows": [{
                "columns": {
                    "study_plan": {"text": "Day 1: read chapter 3"},
                    "summarized_notes": {"text": "Mitosis has four phases"},
                    "quiz_questions": {"text": "Q1: Name the phases."},
                    "supplementary_resources": {"text": "Campbell Biology, ch. 12"}
                }
            }]
        }"#;

        let response: RowAddResponse = serde_json::from_str(json).unwrap();
        let result = response
            .rows
            .into_iter()
            .next()
            .unwrap()
            .columns
            .into_generation_result();

        assert_eq!(result.study_plan, "Day 1: read chapter 3");
        assert_eq!(result.supplementary_resources, "Campbell Biology, ch. 12");
    }

    #[test]
    fn test_missing_column_becomes_sentinel() {
        let json = r#"{
            "rows": [{
                "columns": {
                    "study_plan": {"text": "plan"},
                    "summarized_notes": {"text": "notes"},
                    "supplementary_resources": {"text": "resources"}
                }
            }]
        }"#;

        let response: RowAddResponse = serde_json::from_str(json).unwrap();
        let result = response
            .rows
            .into_iter()
            .next()
            .unwrap()
            .columns
            .into_generation_result();

        assert_eq!(result.quiz_questions, "N/A");
        assert_eq!(result.study_plan, "plan");
    }

    #[test]
    fn test_column_without_text_becomes_sentinel() {
        let json = r#"{"rows": [{"columns": {"study_plan": {}}}]}"#;
        let response: RowAddResponse = serde_json::from_str(json).unwrap();
        let result = response
            .rows
            .into_iter()
            .next()
            .unwrap()
            .columns
            .into_generation_result();

        assert_eq!(result.study_plan, "N/A");
    }

    #[test]
    fn test_zero_rows_deserializes_to_empty_list() {
        let response: RowAddResponse = serde_json::from_str(r#"{"rows": []}"#).unwrap();
        assert!(response.rows.is_empty());

        let response: RowAddResponse = serde_json::from_str("{}").unwrap();
        assert!(response.rows.is_empty());
    }
}
