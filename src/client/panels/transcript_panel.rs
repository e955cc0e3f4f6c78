use serde::Serialize;

use crate::client::api::LearningApi;
use crate::client::store::LearningStore;
use crate::youtube::Transcript;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TranscriptPanelState {
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

/// A transcript fetch the panel wants performed for a module selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLoad {
    pub selection: u64,
    pub video_url: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptLineView {
    pub number: usize,
    pub time: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptPanelView {
    pub module_selected: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub lines: Vec<TranscriptLineView>,
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Loads and lists the transcript of the selected module
#[derive(Debug)]
pub struct TranscriptPanel {
    state: TranscriptPanelState,
    // Module selection the current state belongs to
    selection: Option<u64>,
}

impl Default for TranscriptPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptPanel {
    pub fn new() -> Self {
        Self {
            state: TranscriptPanelState::Idle,
            selection: None,
        }
    }

    pub fn state(&self) -> &TranscriptPanelState {
        &self.state
    }

    /// Check the store for a new module selection. Returns the fetch
    /// to perform when the selection changed since the last call.
    pub fn sync(&mut self, store: &LearningStore) -> Option<TranscriptLoad> {
        let Some(module) = store.selected_module() else {
            self.state = TranscriptPanelState::Idle;
            self.selection = None;
            return None;
        };
        if self.selection == Some(store.selection()) {
            return None;
        }

        self.selection = Some(store.selection());
        if module.video_url.trim().is_empty() {
            self.state = TranscriptPanelState::Errored(String::from("This module has no video"));
            return None;
        }
        self.state = TranscriptPanelState::Loading;
        Some(TranscriptLoad {
            selection: store.selection(),
            video_url: module.video_url.clone(),
        })
    }

    /// Apply a finished fetch. Results for a selection that is no
    /// longer current are dropped.
    pub fn finish_load(
        &mut self,
        store: &mut LearningStore,
        load: &TranscriptLoad,
        result: anyhow::Result<Transcript>,
    ) {
        if store.selection() != load.selection || self.selection != Some(load.selection) {
            tracing::debug!("Discarding transcript for stale selection {}", load.selection);
            return;
        }
        match result {
            Ok(transcript) => {
                store.set_transcript(transcript);
                self.state = TranscriptPanelState::Loaded;
            }
            Err(e) => {
                self.state = TranscriptPanelState::Errored(e.to_string());
            }
        }
    }

    /// Load the transcript when the selected module changed
    pub async fn load<A>(&mut self, store: &mut LearningStore, api: &A)
    where
        A: LearningApi + ?Sized,
    {
        if let Some(load) = self.sync(store) {
            let result = api.get_transcript(&load.video_url).await;
            self.finish_load(store, &load, result);
        }
    }

    /// Seek the video to the start of transcript line `number`
    /// (1-based). Returns the new position.
    pub fn click_line(&self, store: &mut LearningStore, number: usize) -> Option<f64> {
        let start = store
            .transcript()?
            .transcript
            .get(number.checked_sub(1)?)?
            .start;
        store.set_video_timestamp(start);
        Some(start)
    }

    pub fn view(&self, store: &LearningStore) -> TranscriptPanelView {
        let lines = match (&self.state, store.transcript()) {
            (TranscriptPanelState::Loaded, Some(transcript)) => transcript
                .transcript
                .iter()
                .enumerate()
                .map(|(i, s)| TranscriptLineView {
                    number: i + 1,
                    time: format_time(s.start),
                    text: s.text.clone(),
                })
                .collect(),
            _ => Vec::new(),
        };
        let error = match &self.state {
            TranscriptPanelState::Errored(e) => Some(e.clone()),
            _ => None,
        };

        TranscriptPanelView {
            module_selected: store.selected_module().is_some(),
            loading: self.state == TranscriptPanelState::Loading,
            error,
            lines,
        }
    }
}
