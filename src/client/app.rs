use super::api::LearningApi;
use super::panels::{
    ChatPanel, PlayerCommand, SyllabusView, TopicInput, TranscriptPanel, VideoPlayer,
};
use super::render::Renderer;
use super::store::LearningStore;
use crate::ai::{ChatRole, TimestampReference, extract_timestamps};
use crate::core::Result;

/// One learning session: the shared store, every panel, and the API
/// the panels talk to.
pub struct LearningApp<A: LearningApi> {
    pub store: LearningStore,
    pub topic_input: TopicInput,
    pub syllabus_view: SyllabusView,
    pub video_player: VideoPlayer,
    pub transcript_panel: TranscriptPanel,
    pub chat_panel: ChatPanel,
    api: A,
    renderer: Renderer<'static>,
}

impl<A: LearningApi> LearningApp<A> {
    pub fn new(api: A) -> Self {
        Self {
            store: LearningStore::new(),
            topic_input: TopicInput::new(),
            syllabus_view: SyllabusView::new(),
            video_player: VideoPlayer::new(),
            transcript_panel: TranscriptPanel::new(),
            chat_panel: ChatPanel::new(),
            api,
            renderer: Renderer::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn submit_topic(&mut self, topic: &str) -> bool {
        self.topic_input.set_topic(topic);
        self.topic_input.submit(&mut self.store, &self.api).await
    }

    /// Select a module, fetch its transcript and point the player at
    /// its video. Returns the player commands, empty if there is no
    /// such module.
    pub async fn select_module(&mut self, id: i64) -> Vec<PlayerCommand> {
        if !self.syllabus_view.select_module(&mut self.store, id) {
            return Vec::new();
        }
        let commands = self.video_player.sync(&self.store);
        self.transcript_panel.load(&mut self.store, &self.api).await;
        commands
    }

    /// Seek to the start of transcript line `number` (1-based)
    pub fn click_transcript_line(&mut self, number: usize) -> Vec<PlayerCommand> {
        if self
            .transcript_panel
            .click_line(&mut self.store, number)
            .is_none()
        {
            return Vec::new();
        }
        self.video_player.sync(&self.store)
    }

    pub async fn ask(&mut self, question: &str) -> bool {
        self.chat_panel.set_input(question);
        self.chat_panel.submit(&self.store, &self.api).await
    }

    pub fn seek(&mut self, reference: &TimestampReference) -> Vec<PlayerCommand> {
        self.chat_panel.seek_to(&mut self.store, reference);
        self.video_player.sync(&self.store)
    }

    /// Timestamp mentions in the latest tutor reply
    pub fn latest_timestamps(&self) -> Vec<TimestampReference> {
        self.chat_panel
            .entries()
            .iter()
            .rev()
            .find(|e| e.message.role == ChatRole::Assistant && !e.failed)
            .map(|e| extract_timestamps(&e.message.content))
            .unwrap_or_default()
    }

    pub fn render_topic_input(&self) -> Result<String> {
        self.renderer.topic_input(&self.topic_input.view())
    }

    pub fn render_syllabus(&self) -> Result<String> {
        self.renderer.syllabus(&self.syllabus_view.view(&self.store))
    }

    pub fn render_video_player(&self) -> Result<String> {
        self.renderer.video_player(&self.video_player.view(&self.store))
    }

    pub fn render_transcript(&self) -> Result<String> {
        self.renderer
            .transcript(&self.transcript_panel.view(&self.store))
    }

    pub fn render_chat(&self) -> Result<String> {
        self.renderer.chat(&self.chat_panel.view(&self.store))
    }

    /// Every panel, top to bottom
    pub fn render(&self) -> Result<String> {
        let sections = [
            self.render_topic_input()?,
            self.render_syllabus()?,
            self.render_video_player()?,
            self.render_transcript()?,
            self.render_chat()?,
        ];
        Ok(sections.join("\n"))
    }
}
