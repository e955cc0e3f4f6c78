//! Public types for the tutor API
use serde::{Deserialize, Serialize};

use crate::ai::ChatMessage;
pub use crate::ai::{TimestampReference, TutorAnswer as TutorResponse};

#[derive(Serialize, Deserialize, Default)]
pub struct TutorRequest {
    pub question: Option<String>,
    pub transcript: Option<String>,
    // Earlier messages of the conversation, oldest first. Missing and
    // null both mean no history.
    #[serde(default)]
    pub chat_history: Option<Vec<ChatMessage>>,
}
