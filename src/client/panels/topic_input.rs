use serde::Serialize;

use crate::client::api::LearningApi;
use crate::client::store::LearningStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TopicInputState {
    Idle,
    Submitting,
}

#[derive(Debug, Serialize)]
pub struct TopicInputView {
    pub topic: String,
    pub submitting: bool,
    pub can_submit: bool,
    pub button_label: &'static str,
}

/// Text box that turns a topic into a syllabus
#[derive(Debug)]
pub struct TopicInput {
    topic: String,
    state: TopicInputState,
}

impl Default for TopicInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicInput {
    pub fn new() -> Self {
        Self {
            topic: String::new(),
            state: TopicInputState::Idle,
        }
    }

    pub fn set_topic(&mut self, topic: &str) {
        self.topic = topic.to_string();
    }

    pub fn state(&self) -> TopicInputState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state == TopicInputState::Idle && !self.topic.trim().is_empty()
    }

    /// Start a submission. Returns the topic to request, or `None`
    /// when there is nothing to submit.
    pub fn begin_submit(&mut self, store: &mut LearningStore) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.state = TopicInputState::Submitting;
        store.set_error(None);
        Some(self.topic.clone())
    }

    /// Apply the outcome of a submission. A failure leaves the current
    /// syllabus in place.
    pub fn finish_submit(
        &mut self,
        store: &mut LearningStore,
        result: anyhow::Result<crate::ai::Syllabus>,
    ) {
        match result {
            Ok(syllabus) => store.set_syllabus(syllabus),
            Err(e) => {
                tracing::debug!("Syllabus request failed: {}", e);
                store.set_error(Some(e.to_string()));
            }
        }
        self.state = TopicInputState::Idle;
    }

    /// Submit the current topic. Returns false if nothing was sent.
    pub async fn submit<A>(&mut self, store: &mut LearningStore, api: &A) -> bool
    where
        A: LearningApi + ?Sized,
    {
        let Some(topic) = self.begin_submit(store) else {
            return false;
        };
        let result = api.generate_syllabus(&topic).await;
        self.finish_submit(store, result);
        true
    }

    pub fn view(&self) -> TopicInputView {
        let submitting = self.state == TopicInputState::Submitting;
        TopicInputView {
            topic: self.topic.clone(),
            submitting,
            can_submit: self.can_submit(),
            button_label: if submitting {
                "Generating..."
            } else {
                "Generate Syllabus"
            },
        }
    }
}
