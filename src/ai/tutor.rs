use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::models::{ChatMessage, ChatRole, TimestampReference};
use super::prompt::{Prompt, templates};
use crate::core::{LearnError, Result};
use crate::google::gemini::{
    Content, GeminiRole, GenerationConfig, candidate_text, generate_content,
};

pub const TUTOR_GENERATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 1000,
};

/// Most recent chat messages forwarded as prior turns
pub const MAX_HISTORY_MESSAGES: usize = 20;

const FALLBACK_RESPONSE: &str = "Unable to generate response.";

// A whole run of ASCII digits on each side of the colon, so the
// length checks below see every adjacent digit
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+):([0-9]+)").expect("Invalid timestamp pattern")
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorAnswer {
    pub response: String,
    pub timestamp_references: Vec<TimestampReference>,
}

/// Piece of a tutor reply, either plain text or a timestamp mention
/// that can be turned into a seek.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplySpan {
    Text(String),
    Timestamp(TimestampReference),
}

/// 1-2 digit minutes and exactly 2 digit seconds, with the byte range
/// of the mention in `text`
fn timestamp_mentions(text: &str) -> impl Iterator<Item = (Range<usize>, TimestampReference)> + '_ {
    TIMESTAMP_RE.captures_iter(text).filter_map(|caps| {
        let (minutes, seconds) = (&caps[1], &caps[2]);
        if minutes.len() > 2 || seconds.len() != 2 {
            return None;
        }
        let m = caps.get(0)?;
        let minutes: u32 = minutes.parse().ok()?;
        let seconds: u32 = seconds.parse().ok()?;
        let reference = TimestampReference {
            text: format!("At {}", m.as_str()),
            seconds: minutes * 60 + seconds,
        };
        Some((m.range(), reference))
    })
}

/// All `m:ss` mentions in `text`, in order of appearance. Repeats are
/// kept.
pub fn extract_timestamps(text: &str) -> Vec<TimestampReference> {
    timestamp_mentions(text)
        .map(|(_, reference)| reference)
        .collect()
}

/// Split `text` into text and timestamp spans. Concatenating the
/// spans (using the bare `m:ss` for timestamps) gives back `text`.
pub fn split_timestamps(text: &str) -> Vec<ReplySpan> {
    let mut spans = Vec::new();
    let mut last = 0;
    for (range, reference) in timestamp_mentions(text) {
        if range.start > last {
            spans.push(ReplySpan::Text(text[last..range.start].to_string()));
        }
        spans.push(ReplySpan::Timestamp(reference));
        last = range.end;
    }
    if last < text.len() {
        spans.push(ReplySpan::Text(text[last..].to_string()));
    }
    spans
}

fn history_contents(history: &[ChatMessage]) -> Vec<Content> {
    let skip = history.len().saturating_sub(MAX_HISTORY_MESSAGES);
    history
        .iter()
        .skip(skip)
        .filter(|m| !m.content.trim().is_empty())
        .map(|m| {
            let role = match m.role {
                ChatRole::User => GeminiRole::User,
                ChatRole::Assistant => GeminiRole::Model,
            };
            Content::new(role, &m.content)
        })
        .collect()
}

/// Answer `question` using the transcript as grounding. Earlier chat
/// messages are sent as prior turns ahead of the grounded prompt.
pub async fn ask_tutor(
    question: &str,
    transcript: &str,
    history: &[ChatMessage],
    api_hostname: &str,
    api_key: Option<&str>,
    model: &str,
) -> Result<TutorAnswer> {
    if question.trim().is_empty() || transcript.trim().is_empty() {
        return Err(LearnError::Validation(
            "question and transcript are required".to_string(),
        ));
    }
    let api_key =
        api_key.ok_or_else(|| LearnError::Config("Gemini API key not configured".to_string()))?;

    let prompt = templates().render(
        &Prompt::Tutor.to_string(),
        &json!({ "transcript": transcript, "question": question }),
    )?;
    let mut contents = history_contents(history);
    contents.push(Content::new(GeminiRole::User, &prompt));

    let resp = generate_content(
        &contents,
        TUTOR_GENERATION_CONFIG,
        api_hostname,
        api_key,
        model,
    )
    .await?;
    let response = candidate_text(&resp).unwrap_or(FALLBACK_RESPONSE).to_string();
    let timestamp_references = extract_timestamps(&response);

    tracing::debug!(
        "Tutor answered with {} timestamp references",
        timestamp_references.len()
    );

    Ok(TutorAnswer {
        response,
        timestamp_references,
    })
}
