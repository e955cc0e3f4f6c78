use serde::Serialize;

use crate::client::store::LearningStore;
use crate::youtube::{embed_url, extract_video_id, watch_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlayerState {
    Idle,
    InvalidUrl,
    Playing { video_id: String },
}

/// Commands for the embedded playback widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlayerCommand {
    Load { video_id: String },
    Seek { seconds: f64 },
}

#[derive(Debug, Serialize)]
pub struct VideoPlayerView {
    pub idle: bool,
    pub invalid_url: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    pub embed_url: Option<String>,
    pub watch_url: Option<String>,
}

/// Follows the selected module and the playback timestamp in the
/// store. A timestamp change seeks the loaded video, only a module
/// change loads a new one.
#[derive(Debug)]
pub struct VideoPlayer {
    state: PlayerState,
    position: Option<f64>,
    last_timestamp: Option<f64>,
}

impl Default for VideoPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoPlayer {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Idle,
            position: None,
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn position(&self) -> Option<f64> {
        self.position
    }

    /// Bring the player in line with the store and return the
    /// commands for the playback widget.
    pub fn sync(&mut self, store: &LearningStore) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        match store.selected_module() {
            None => {
                self.state = PlayerState::Idle;
                self.position = None;
            }
            Some(module) => match extract_video_id(&module.video_url) {
                None => {
                    self.state = PlayerState::InvalidUrl;
                    self.position = None;
                }
                Some(id) => {
                    let loaded = matches!(&self.state, PlayerState::Playing { video_id } if video_id == id);
                    if !loaded {
                        self.state = PlayerState::Playing {
                            video_id: id.to_string(),
                        };
                        self.position = None;
                        commands.push(PlayerCommand::Load {
                            video_id: id.to_string(),
                        });
                    }
                }
            },
        }

        let timestamp = store.video_timestamp();
        if timestamp != self.last_timestamp {
            self.last_timestamp = timestamp;
            if let (Some(seconds), PlayerState::Playing { .. }) = (timestamp, &self.state) {
                self.position = Some(seconds);
                commands.push(PlayerCommand::Seek { seconds });
            }
        }

        commands
    }

    pub fn view(&self, store: &LearningStore) -> VideoPlayerView {
        let module = store.selected_module();
        let (embed, watch) = match &self.state {
            PlayerState::Playing { video_id } => (
                Some(embed_url(video_id)),
                Some(watch_url(video_id, self.position)),
            ),
            _ => (None, None),
        };

        VideoPlayerView {
            idle: self.state == PlayerState::Idle,
            invalid_url: self.state == PlayerState::InvalidUrl,
            title: module.map(|m| m.title.clone()),
            description: module.map(|m| m.description.clone()),
            embed_url: embed,
            watch_url: watch,
        }
    }
}
