use serde::Serialize;

use crate::ai::{ChatMessage, ChatRole, ReplySpan, TimestampReference, split_timestamps};
use crate::client::api::LearningApi;
use crate::client::store::LearningStore;

const EMPTY_PLACEHOLDER: &str = "Select a module to start asking questions";
const INPUT_PLACEHOLDER: &str = "Ask questions about the video content...";

/// A message in the conversation. Failed entries are shown to the
/// user but never sent back to the tutor as history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub message: ChatMessage,
    pub failed: bool,
}

/// A question waiting for the tutor
#[derive(Debug, Clone, PartialEq)]
pub struct TutorQuestion {
    pub question: String,
    pub transcript: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SpanView {
    Text { text: String },
    Timestamp { label: String, time: String, seconds: u32 },
}

#[derive(Debug, Serialize)]
pub struct ChatEntryView {
    pub speaker: &'static str,
    pub failed: bool,
    pub spans: Vec<SpanView>,
}

#[derive(Debug, Serialize)]
pub struct ChatPanelView {
    pub enabled: bool,
    pub loading: bool,
    pub placeholder: &'static str,
    pub input: String,
    pub entries: Vec<ChatEntryView>,
}

fn span_view(span: ReplySpan) -> SpanView {
    match span {
        ReplySpan::Text(text) => SpanView::Text { text },
        ReplySpan::Timestamp(reference) => SpanView::Timestamp {
            time: reference
                .text
                .trim_start_matches("At ")
                .to_string(),
            label: reference.text,
            seconds: reference.seconds,
        },
    }
}

/// Question and answer conversation about the loaded transcript
#[derive(Debug, Default)]
pub struct ChatPanel {
    entries: Vec<ChatEntry>,
    input: String,
    loading: bool,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    pub fn can_submit(&self, store: &LearningStore) -> bool {
        store.transcript().is_some() && !self.loading && !self.input.trim().is_empty()
    }

    /// Append the typed question to the conversation and return what
    /// to send to the tutor.
    pub fn begin_submit(&mut self, store: &LearningStore) -> Option<TutorQuestion> {
        if !self.can_submit(store) {
            return None;
        }
        let transcript = store.transcript()?;

        let history = self
            .entries
            .iter()
            .filter(|e| !e.failed)
            .map(|e| e.message.clone())
            .collect();
        let question = std::mem::take(&mut self.input).trim().to_string();
        self.entries.push(ChatEntry {
            message: ChatMessage::new(ChatRole::User, &question),
            failed: false,
        });
        self.loading = true;

        Some(TutorQuestion {
            question,
            transcript: transcript.full_text.clone(),
            history,
        })
    }

    /// Append the tutor's reply. Failures become an inline assistant
    /// message.
    pub fn finish_submit(&mut self, result: anyhow::Result<String>) {
        let entry = match result {
            Ok(response) => ChatEntry {
                message: ChatMessage::new(ChatRole::Assistant, &response),
                failed: false,
            },
            Err(e) => {
                tracing::debug!("Tutor request failed: {}", e);
                ChatEntry {
                    message: ChatMessage::new(ChatRole::Assistant, &format!("Error: {}", e)),
                    failed: true,
                }
            }
        };
        self.entries.push(entry);
        self.loading = false;
    }

    /// Ask the typed question. Returns false if nothing was sent.
    pub async fn submit<A>(&mut self, store: &LearningStore, api: &A) -> bool
    where
        A: LearningApi + ?Sized,
    {
        let Some(q) = self.begin_submit(store) else {
            return false;
        };
        let result = api
            .ask_tutor(&q.question, &q.transcript, &q.history)
            .await
            .map(|answer| answer.response);
        self.finish_submit(result);
        true
    }

    /// Jump the video to a timestamp mentioned in a reply
    pub fn seek_to(&self, store: &mut LearningStore, reference: &TimestampReference) {
        store.set_video_timestamp(f64::from(reference.seconds));
    }

    pub fn view(&self, store: &LearningStore) -> ChatPanelView {
        let enabled = store.transcript().is_some();
        let entries = self
            .entries
            .iter()
            .map(|e| {
                let spans = match e.message.role {
                    // Only tutor replies get clickable timestamps
                    ChatRole::Assistant if !e.failed => split_timestamps(&e.message.content)
                        .into_iter()
                        .map(span_view)
                        .collect(),
                    _ => vec![SpanView::Text {
                        text: e.message.content.clone(),
                    }],
                };
                ChatEntryView {
                    speaker: match e.message.role {
                        ChatRole::User => "You",
                        ChatRole::Assistant => "AI Tutor",
                    },
                    failed: e.failed,
                    spans,
                }
            })
            .collect();

        ChatPanelView {
            enabled,
            loading: self.loading,
            // Questions can be typed while the transcript is still loading
            placeholder: if store.selected_module().is_some() {
                INPUT_PLACEHOLDER
            } else {
                EMPTY_PLACEHOLDER
            },
            input: self.input.clone(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::{RawSegment, Transcript};
    use anyhow::anyhow;

    fn store_with_transcript() -> LearningStore {
        let mut store = LearningStore::new();
        store.set_transcript(Transcript::from_raw(vec![
            RawSegment::new("eigen", 0.0, 1000.0),
            RawSegment::new("values", 1000.0, 1000.0),
        ]));
        store
    }

    #[test]
    fn it_is_disabled_without_transcript() {
        let store = LearningStore::new();
        let mut panel = ChatPanel::new();
        panel.set_input("What is a vector?");
        assert!(panel.begin_submit(&store).is_none());
        assert!(panel.entries().is_empty());
        assert_eq!(panel.view(&store).placeholder, EMPTY_PLACEHOLDER);
    }

    #[test]
    fn it_prompts_for_questions_once_a_module_is_selected() {
        let mut store = LearningStore::new();
        store.set_selected_module(std::sync::Arc::new(crate::ai::Module {
            id: 1,
            title: String::from("Vectors"),
            description: String::new(),
            video_url: String::from("https://youtu.be/a"),
            channel: None,
            duration: None,
        }));

        let view = ChatPanel::new().view(&store);
        assert!(!view.enabled);
        assert_eq!(view.placeholder, INPUT_PLACEHOLDER);
    }

    #[test]
    fn it_appends_question_then_answer() {
        let store = store_with_transcript();
        let mut panel = ChatPanel::new();
        panel.set_input("  What is an eigenvalue? ");

        let q = panel.begin_submit(&store).unwrap();
        assert_eq!(q.question, "What is an eigenvalue?");
        assert_eq!(q.transcript, "eigen values");
        assert!(q.history.is_empty());
        assert!(panel.is_loading());
        assert_eq!(panel.entries().len(), 1);

        panel.finish_submit(Ok(String::from("See 1:05 for the definition.")));
        assert!(!panel.is_loading());
        assert_eq!(panel.entries().len(), 2);

        let view = panel.view(&store);
        assert_eq!(view.entries[0].speaker, "You");
        assert_eq!(view.entries[1].speaker, "AI Tutor");
        assert!(matches!(
            &view.entries[1].spans[1],
            SpanView::Timestamp { seconds: 65, .. }
        ));
    }

    #[test]
    fn it_shows_errors_inline_and_keeps_them_out_of_history() {
        let store = store_with_transcript();
        let mut panel = ChatPanel::new();

        panel.set_input("first");
        panel.begin_submit(&store).unwrap();
        panel.finish_submit(Err(anyhow!("Gemini API error: Bad Gateway")));
        assert_eq!(
            panel.entries()[1].message.content,
            "Error: Gemini API error: Bad Gateway"
        );
        assert!(panel.entries()[1].failed);

        panel.set_input("second");
        let q = panel.begin_submit(&store).unwrap();
        assert_eq!(q.history, vec![ChatMessage::new(ChatRole::User, "first")]);
    }

    #[test]
    fn it_seeks_to_reply_timestamps() {
        let mut store = store_with_transcript();
        let panel = ChatPanel::new();
        let reference = TimestampReference {
            text: String::from("At 5:30"),
            seconds: 330,
        };
        panel.seek_to(&mut store, &reference);
        assert_eq!(store.video_timestamp(), Some(330.0));
    }
}
