//! Public types for the transcript API
use serde::{Deserialize, Serialize};

pub use crate::youtube::{Transcript, TranscriptSegment};

#[derive(Serialize, Deserialize, Default)]
pub struct TranscriptRequest {
    pub video_url: Option<String>,
}
