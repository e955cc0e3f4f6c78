//! Client for the Gemini `generateContent` API

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{LearnError, Result};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum GeminiRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Content {
    pub role: GeminiRole,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: GeminiRole, text: &str) -> Self {
        Self {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Clone, Copy, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    generation_config: GenerationConfig,
}

pub async fn generate_content(
    contents: &[Content],
    generation_config: GenerationConfig,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches('/'),
        model
    );
    let payload = GenerateContentRequest {
        contents,
        generation_config,
    };

    tracing::debug!("Requesting generated content from {}", url);

    let response = reqwest::Client::new()
        .post(url)
        .query(&[("key", api_key)])
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LearnError::Upstream(format!(
            "Gemini API error: {}",
            status.canonical_reason().unwrap_or(status.as_str())
        )));
    }

    Ok(response.json().await?)
}

/// Text of the first part of the first candidate, if any
pub fn candidate_text(resp: &Value) -> Option<&str> {
    resp["candidates"][0]["content"]["parts"][0]["text"].as_str()
}
