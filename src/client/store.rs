//! Session-wide client state. Every mutation goes through one of the
//! setters below; all of them are total and idempotent.

use std::sync::Arc;

use crate::ai::{Module, Syllabus};
use crate::youtube::Transcript;

#[derive(Debug, Default, Clone)]
pub struct LearningStore {
    syllabus: Option<Arc<Syllabus>>,
    selected_module: Option<Arc<Module>>,
    selected_module_id: Option<i64>,
    transcript: Option<Arc<Transcript>>,
    video_timestamp: Option<f64>,
    error: Option<String>,
    // Bumped on every module selection so re-selecting the same module
    // is still seen as a new selection
    selection: u64,
}

impl LearningStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the syllabus and clear any error
    pub fn set_syllabus(&mut self, syllabus: Syllabus) {
        self.syllabus = Some(Arc::new(syllabus));
        self.error = None;
    }

    /// Select a module. The transcript of the previous selection is
    /// dropped.
    pub fn set_selected_module(&mut self, module: Arc<Module>) {
        self.selected_module_id = Some(module.id);
        self.selected_module = Some(module);
        self.transcript = None;
        self.selection += 1;
    }

    pub fn set_transcript(&mut self, transcript: Transcript) {
        self.transcript = Some(Arc::new(transcript));
    }

    /// Playback position in seconds. The video player seeks whenever
    /// this changes.
    pub fn set_video_timestamp(&mut self, timestamp: f64) {
        self.video_timestamp = Some(timestamp);
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn syllabus(&self) -> Option<&Syllabus> {
        self.syllabus.as_deref()
    }

    pub fn selected_module(&self) -> Option<&Arc<Module>> {
        self.selected_module.as_ref()
    }

    pub fn selected_module_id(&self) -> Option<i64> {
        self.selected_module_id
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_deref()
    }

    pub fn video_timestamp(&self) -> Option<f64> {
        self.video_timestamp
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection(&self) -> u64 {
        self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::RawSegment;

    fn module(id: i64) -> Arc<Module> {
        Arc::new(Module {
            id,
            title: format!("Module {id}"),
            description: String::new(),
            video_url: format!("https://youtu.be/video{id}"),
            channel: None,
            duration: None,
        })
    }

    fn syllabus() -> Syllabus {
        Syllabus {
            topic: String::from("Linear Algebra"),
            modules: vec![module(1), module(2)],
            generated_at: String::from("2025-01-01T00:00:00.000Z"),
        }
    }

    fn transcript() -> Transcript {
        Transcript::from_raw(vec![RawSegment::new("hello", 0.0, 1000.0)])
    }

    #[test]
    fn it_starts_empty() {
        let store = LearningStore::new();
        assert!(store.syllabus().is_none());
        assert!(store.selected_module().is_none());
        assert!(store.selected_module_id().is_none());
        assert!(store.transcript().is_none());
        assert!(store.video_timestamp().is_none());
        assert!(store.error().is_none());
    }

    #[test]
    fn it_clears_error_when_syllabus_is_set() {
        let mut store = LearningStore::new();
        store.set_error(Some(String::from("boom")));
        store.set_syllabus(syllabus());
        assert!(store.error().is_none());
        assert_eq!(store.syllabus().unwrap().topic, "Linear Algebra");
    }

    #[test]
    fn it_clears_transcript_on_every_selection() {
        let mut store = LearningStore::new();
        store.set_syllabus(syllabus());

        store.set_selected_module(module(1));
        store.set_transcript(transcript());
        store.set_selected_module(module(2));
        assert!(store.transcript().is_none());
        assert_eq!(store.selected_module_id(), Some(2));

        // Selecting the same module again also starts over
        store.set_transcript(transcript());
        store.set_selected_module(module(2));
        assert!(store.transcript().is_none());
    }

    #[test]
    fn it_references_the_selected_module() {
        let mut store = LearningStore::new();
        store.set_syllabus(syllabus());
        let selected = Arc::clone(store.syllabus().unwrap().module(1).unwrap());
        store.set_selected_module(selected);

        let in_syllabus = store.syllabus().unwrap().module(1).unwrap();
        assert!(Arc::ptr_eq(store.selected_module().unwrap(), in_syllabus));
    }

    #[test]
    fn it_applies_setters_idempotently() {
        let mut store = LearningStore::new();
        store.set_video_timestamp(42.0);
        store.set_video_timestamp(42.0);
        assert_eq!(store.video_timestamp(), Some(42.0));

        store.set_error(Some(String::from("oops")));
        store.set_error(Some(String::from("oops")));
        assert_eq!(store.error(), Some("oops"));
        store.set_error(None);
        assert!(store.error().is_none());
    }
}
