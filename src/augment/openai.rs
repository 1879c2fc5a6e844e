//! OpenAI Responses API client with web search

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{extract_json_array, AugmentError, Augmenter};
use crate::config::AiConfig;

pub const RESPONSES_ENDPOINT: &str = "https://api.openai.com/v1/responses";

/// Augmenter that asks an OpenAI model to search the web for the query
pub struct OpenAiAugmenter {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiAugmenter {
    pub fn new(config: &AiConfig) -> Result<Self, AugmentError> {
        Self::with_endpoint(config, RESPONSES_ENDPOINT)
    }

    /// Point the client at a different Responses endpoint
    pub fn with_endpoint(config: &AiConfig, endpoint: &str) -> Result<Self, AugmentError> {
        let client = build_client(config.timeout)?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn build_client(timeout: Duration) -> Result<Client, AugmentError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

impl Augmenter for OpenAiAugmenter {
    fn augment(&self, query: &str) -> Result<Vec<Value>, AugmentError> {
        let body = json!({
            "model": self.model,
            "tools": [{ "type": "web_search" }],
            "input": build_prompt(query),
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(AugmentError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResponsesOutput = response.json()?;
        let text = parsed.output_text();
        debug!(model = %self.model, chars = text.len(), "web search response received");

        Ok(extract_json_array(&text).unwrap_or_default())
    }
}

/// Subset of a Responses API reply
#[derive(Debug, Default, Deserialize)]
pub struct ResponsesOutput {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl ResponsesOutput {
    /// Concatenated text of every `output_text` part
    pub fn output_text(&self) -> String {
        self.output
            .iter()
            .flat_map(|item| &item.content)
            .filter(|part| part.kind == "output_text")
            .map(|part| part.text.as_str())
            .collect()
    }
}

/// Instructions sent to the model for one query
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"Return ONLY a JSON array.

Search the web for REAL doctors and articles related to "{query}".

Doctor format:
{{
  "type":"doctor",
  "name":"",
  "specialization":"",
  "department":"",
  "experience":"",
  "focusAreas":"",
  "email":"",
  "phone":"",
  "hospital":"",
  "link":""
}}

Article format:
{{
  "type":"article",
  "title":"",
  "excerpt":"",
  "author":"",
  "publishedDate":"",
  "category":"",
  "readingTime":"",
  "link":""
}}

Rules:
- Must use real public data
- Must include real links
- No fake info
- Output ONLY JSON array
"#
    )
}
