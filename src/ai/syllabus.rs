use std::sync::LazyLock;

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde_json::{Map, Value, json};

use super::prompt::{Prompt, templates};
use crate::core::{LearnError, Result};
use crate::perplexity::{CompletionOptions, Message, Role, completion, completion_content};

/// Low temperature keeps the JSON shape stable
pub const SYLLABUS_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.2,
    max_tokens: 2000,
};

// First fenced code block, with or without a `json` language tag
static FENCED_JSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?[ \t]*\r?\n(.*?)\r?\n[ \t]*```")
        .expect("Invalid fenced block pattern")
});

/// Parse a syllabus out of model output. Tries the whole reply as
/// JSON first, then the first fenced code block. The result is kept
/// verbatim, only checked to be a JSON object.
pub fn parse_syllabus(text: &str) -> Result<Map<String, Value>> {
    let value = match serde_json::from_str::<Value>(text.trim()) {
        Ok(value) => value,
        Err(_) => {
            let block = FENCED_JSON_RE
                .captures(text)
                .and_then(|caps| caps.get(1))
                .ok_or_else(|| LearnError::Parse("Failed to parse syllabus JSON".to_string()))?;
            serde_json::from_str::<Value>(block.as_str())
                .map_err(|e| LearnError::Parse(format!("Failed to parse syllabus JSON: {}", e)))?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LearnError::Parse(
            "Syllabus JSON is not an object".to_string(),
        )),
    }
}

/// Ask the completion API for a 5-module syllabus on `topic` and
/// return it stamped with `generated_at`.
pub async fn generate_syllabus(
    topic: &str,
    api_hostname: &str,
    api_key: Option<&str>,
    model: &str,
) -> Result<Value> {
    if topic.trim().is_empty() {
        return Err(LearnError::Validation("Topic is required".to_string()));
    }
    let api_key = api_key
        .ok_or_else(|| LearnError::Config("Perplexity API key not configured".to_string()))?;

    let templates = templates();
    let system_msg = templates.render(&Prompt::SyllabusSystem.to_string(), &json!({}))?;
    let user_msg = templates.render(
        &Prompt::SyllabusRequest.to_string(),
        &json!({ "topic": topic }),
    )?;
    let messages = vec![
        Message::new(Role::System, &system_msg),
        Message::new(Role::User, &user_msg),
    ];

    let resp = completion(&messages, SYLLABUS_OPTIONS, api_hostname, api_key, model).await?;
    let content = completion_content(&resp).ok_or_else(|| {
        LearnError::Parse("Completion response did not include a syllabus".to_string())
    })?;

    let mut syllabus = parse_syllabus(content)?;
    syllabus.insert(
        "generated_at".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    tracing::info!("Generated syllabus for topic {:?}", topic);

    Ok(Value::Object(syllabus))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYLLABUS_JSON: &str = r#"{"topic": "Linear Algebra", "modules": [{"id": 1, "title": "Vectors", "description": "What is a vector", "video_url": "https://www.youtube.com/watch?v=fNk_zzaMoSs", "channel": "3Blue1Brown", "duration": "9:52"}]}"#;

    fn completion_body(content: &str) -> String {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[test]
    fn it_parses_plain_json() {
        let syllabus = parse_syllabus(SYLLABUS_JSON).unwrap();
        assert_eq!(syllabus["topic"], "Linear Algebra");
        assert_eq!(syllabus["modules"][0]["channel"], "3Blue1Brown");
    }

    #[test]
    fn it_parses_fenced_json_identically() {
        let fenced = format!("Here is your syllabus:\n```json\n{}\n```\nEnjoy!", SYLLABUS_JSON);
        assert_eq!(
            parse_syllabus(&fenced).unwrap(),
            parse_syllabus(SYLLABUS_JSON).unwrap()
        );

        let untagged = format!("```\n{}\n```", SYLLABUS_JSON);
        assert_eq!(
            parse_syllabus(&untagged).unwrap(),
            parse_syllabus(SYLLABUS_JSON).unwrap()
        );
    }

    #[test]
    fn it_keeps_unknown_fields_and_module_count() {
        let text = r#"{"topic": "Go", "level": "beginner", "modules": [{"id": 1}, {"id": 2}]}"#;
        let syllabus = parse_syllabus(text).unwrap();
        assert_eq!(syllabus["level"], "beginner");
        assert_eq!(syllabus["modules"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn it_fails_on_unparseable_output() {
        for text in [
            "Sorry, I can't help with that.",
            "```json\n{not json}\n```",
            "[1, 2, 3]",
        ] {
            let err = parse_syllabus(text).unwrap_err();
            assert!(matches!(err, LearnError::Parse(_)), "{text}");
        }
    }

    #[tokio::test]
    async fn it_rejects_blank_topic_without_calling_upstream() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        for topic in ["", "   ", "\n\t"] {
            let err = generate_syllabus(topic, &server.url(), Some("key"), "sonar-pro")
                .await
                .unwrap_err();
            assert!(matches!(err, LearnError::Validation(_)));
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_requires_an_api_key() {
        let err = generate_syllabus("Rust", "http://127.0.0.1:1", None, "sonar-pro")
            .await
            .unwrap_err();
        assert!(matches!(err, LearnError::Config(_)));
    }

    #[tokio::test]
    async fn it_generates_and_stamps_syllabus() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(mockito::Matcher::Regex(
                "Create a 5-module learning syllabus for: Linear Algebra".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(&format!("```json\n{}\n```", SYLLABUS_JSON)))
            .create_async()
            .await;

        let syllabus = generate_syllabus("Linear Algebra", &server.url(), Some("key"), "sonar-pro")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(syllabus["topic"], "Linear Algebra");
        let generated_at = syllabus["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(generated_at).is_ok());
    }

    #[tokio::test]
    async fn it_fails_when_completion_has_no_content() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let err = generate_syllabus("Rust", &server.url(), Some("key"), "sonar-pro")
            .await
            .unwrap_err();
        assert!(matches!(err, LearnError::Parse(_)));
    }
}
