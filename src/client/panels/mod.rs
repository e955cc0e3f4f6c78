mod chat_panel;
mod syllabus_view;
mod topic_input;
mod transcript_panel;
mod video_player;

pub use chat_panel::{
    ChatEntry, ChatEntryView, ChatPanel, ChatPanelView, SpanView, TutorQuestion,
};
pub use syllabus_view::{ModuleRowView, SyllabusView, SyllabusViewModel, SyllabusViewState};
pub use topic_input::{TopicInput, TopicInputState, TopicInputView};
pub use transcript_panel::{
    TranscriptLineView, TranscriptLoad, TranscriptPanel, TranscriptPanelState,
    TranscriptPanelView, format_time,
};
pub use video_player::{PlayerCommand, PlayerState, VideoPlayer, VideoPlayerView};
