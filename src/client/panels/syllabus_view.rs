use std::sync::Arc;

use serde::Serialize;

use crate::client::store::LearningStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SyllabusViewState {
    Empty,
    Errored(String),
    Populated,
    ModuleSelected(i64),
}

#[derive(Debug, Serialize)]
pub struct ModuleRowView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub channel: Option<String>,
    pub duration: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SyllabusViewModel {
    pub state: SyllabusViewState,
    pub error: Option<String>,
    pub topic: Option<String>,
    pub generated_at: Option<String>,
    pub modules: Vec<ModuleRowView>,
}

/// Lists the modules of the current syllabus. Holds no state of its
/// own, everything comes from the store.
#[derive(Debug, Default)]
pub struct SyllabusView;

impl SyllabusView {
    pub fn new() -> Self {
        Self
    }

    pub fn state(&self, store: &LearningStore) -> SyllabusViewState {
        if let Some(error) = store.error() {
            return SyllabusViewState::Errored(error.to_string());
        }
        match (store.syllabus(), store.selected_module_id()) {
            (None, _) => SyllabusViewState::Empty,
            (Some(syllabus), Some(id)) if syllabus.module(id).is_some() => {
                SyllabusViewState::ModuleSelected(id)
            }
            (Some(_), _) => SyllabusViewState::Populated,
        }
    }

    /// Select the module with `id` from the current syllabus. Returns
    /// false when there is no such module.
    pub fn select_module(&self, store: &mut LearningStore, id: i64) -> bool {
        let Some(module) = store.syllabus().and_then(|s| s.module(id)).map(Arc::clone) else {
            return false;
        };
        store.set_selected_module(module);
        true
    }

    pub fn view(&self, store: &LearningStore) -> SyllabusViewModel {
        let state = self.state(store);
        let error = store.error().map(str::to_string);
        let Some(syllabus) = store.syllabus() else {
            return SyllabusViewModel {
                state,
                error,
                topic: None,
                generated_at: None,
                modules: Vec::new(),
            };
        };

        let modules = syllabus
            .modules
            .iter()
            .map(|m| ModuleRowView {
                id: m.id,
                title: m.title.clone(),
                description: m.description.clone(),
                channel: m.channel.clone(),
                duration: m.duration.clone(),
                selected: store.selected_module_id() == Some(m.id),
            })
            .collect();

        SyllabusViewModel {
            state,
            error,
            topic: Some(syllabus.topic.clone()),
            generated_at: Some(syllabus.generated_at.clone()),
            modules,
        }
    }
}
