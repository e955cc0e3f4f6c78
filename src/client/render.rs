//! Terminal rendering of the panel view models. Replies are split into
//! structured spans before they get here, so templates never see raw
//! markup built from model output.

use std::fmt;

use handlebars::Handlebars;
use serde::Serialize;

use super::panels::{
    ChatPanelView, SyllabusViewModel, TopicInputView, TranscriptPanelView, VideoPlayerView,
};
use crate::core::Result;

#[derive(Debug, Clone, Copy)]
pub enum Panel {
    TopicInput,
    Syllabus,
    VideoPlayer,
    Transcript,
    Chat,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const TOPIC_INPUT_TEMPLATE: &str = "Topic: {{topic}}
[{{button_label}}]{{#unless can_submit}} (disabled){{/unless}}
";

const SYLLABUS_TEMPLATE: &str = "{{#if error}}Error: {{error}}
{{/if}}{{#if topic}}Syllabus: {{topic}} (generated {{generated_at}})
{{#each modules}}{{#if selected}}>{{else}} {{/if}} {{id}}. {{title}}{{#if duration}} [{{duration}}]{{/if}}
     {{description}}
{{#if channel}}     Channel: {{channel}}
{{/if}}{{/each}}{{else}}No syllabus yet. Enter a topic to get started.
{{/if}}";

const VIDEO_PLAYER_TEMPLATE: &str = "{{#if idle}}Select a module to start learning
{{else}}{{title}}
{{description}}
{{#if invalid_url}}Invalid video URL
{{else}}Embed: {{embed_url}}
Watch: {{watch_url}}
{{/if}}{{/if}}";

const TRANSCRIPT_TEMPLATE: &str = "{{#if module_selected}}{{#if loading}}Loading transcript...
{{else}}{{#if error}}Error: {{error}}
{{else}}{{#each lines}}{{number}}. [{{time}}] {{text}}
{{/each}}{{/if}}{{/if}}{{else}}Select a module to view its transcript
{{/if}}";

const CHAT_TEMPLATE: &str = "{{#each entries}}{{speaker}}: {{#each spans}}{{#if (eq kind \"timestamp\")}}[▶ {{time}}]{{else}}{{text}}{{/if}}{{/each}}
{{/each}}{{#if loading}}AI Tutor is thinking...
{{/if}}{{#if enabled}}> {{#if input}}{{input}}{{else}}{{placeholder}}{{/if}}{{else}}{{placeholder}}{{/if}}
";

pub struct Renderer<'a> {
    registry: Handlebars<'a>,
}

impl Default for Renderer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<'_> {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        for (panel, template) in [
            (Panel::TopicInput, TOPIC_INPUT_TEMPLATE),
            (Panel::Syllabus, SYLLABUS_TEMPLATE),
            (Panel::VideoPlayer, VIDEO_PLAYER_TEMPLATE),
            (Panel::Transcript, TRANSCRIPT_TEMPLATE),
            (Panel::Chat, CHAT_TEMPLATE),
        ] {
            registry
                .register_template_string(&panel.to_string(), template)
                .expect("Failed to register template");
        }
        Self { registry }
    }

    fn render<T: Serialize>(&self, panel: Panel, view: &T) -> Result<String> {
        Ok(self.registry.render(&panel.to_string(), view)?)
    }

    pub fn topic_input(&self, view: &TopicInputView) -> Result<String> {
        self.render(Panel::TopicInput, view)
    }

    pub fn syllabus(&self, view: &SyllabusViewModel) -> Result<String> {
        self.render(Panel::Syllabus, view)
    }

    pub fn video_player(&self, view: &VideoPlayerView) -> Result<String> {
        self.render(Panel::VideoPlayer, view)
    }

    pub fn transcript(&self, view: &TranscriptPanelView) -> Result<String> {
        self.render(Panel::Transcript, view)
    }

    pub fn chat(&self, view: &ChatPanelView) -> Result<String> {
        self.render(Panel::Chat, view)
    }
}
