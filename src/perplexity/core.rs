use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::{LearnError, Result};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Sampling settings sent along with every completion request
#[derive(Clone, Copy, Debug)]
pub struct CompletionOptions {
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Request a single chat completion. Non-success responses are
/// reported as `LearnError::Upstream` using the HTTP status text.
pub async fn completion(
    messages: &[Message],
    options: CompletionOptions,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Value> {
    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": options.temperature,
        "max_tokens": options.max_tokens,
    });
    let url = format!("{}/chat/completions", api_hostname.trim_end_matches('/'));

    tracing::debug!("Requesting completion from {} using {}", url, model);

    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LearnError::Upstream(format!(
            "Perplexity API error: {}",
            status.canonical_reason().unwrap_or(status.as_str())
        )));
    }

    Ok(response.json().await?)
}

/// Text of the first choice in a completion response, if any
pub fn completion_content(resp: &Value) -> Option<&str> {
    resp["choices"][0]["message"]["content"].as_str()
}
