//! Reusable prompts using Handlebars for templating. Strict mode
//! makes a missing variable a render error instead of an empty
//! string. Prompts are plain text so HTML escaping is turned off.

use std::fmt;

use handlebars::Handlebars;

#[derive(Debug)]
pub enum Prompt {
    SyllabusSystem,
    SyllabusRequest,
    Tutor,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

const SYLLABUS_SYSTEM_PROMPT: &str = r#"You are a curriculum designer. Generate a structured 5-module learning syllabus with curated YouTube video recommendations. Return ONLY valid JSON with this structure: {"topic": "...", "modules": [{"id": 1, "title": "...", "description": "...", "video_url": "https://www.youtube.com/watch?v=...", "channel": "...", "duration": "..."}]}"#;

const SYLLABUS_REQUEST_PROMPT: &str = r"Create a 5-module learning syllabus for: {{topic}}. Include specific YouTube video URLs for each module.";

const TUTOR_PROMPT: &str = r#"You are an AI tutor helping students understand video content. Use the provided video transcript to answer questions accurately. When referencing specific parts of the video, cite the timestamp (e.g., "At 5:30..."). Be concise and educational.

Video Transcript:
{{transcript}}

Student Question: {{question}}"#;

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(&Prompt::SyllabusSystem.to_string(), SYLLABUS_SYSTEM_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::SyllabusRequest.to_string(), SYLLABUS_REQUEST_PROMPT)
        .expect("Failed to register template");
    registry
        .register_template_string(&Prompt::Tutor.to_string(), TUTOR_PROMPT)
        .expect("Failed to register template");
    registry
}
