use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A caption segment as delivered by the transcript source. Timing is
/// in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    pub text: String,
    pub offset_ms: f64,
    pub duration_ms: f64,
}

impl RawSegment {
    pub fn new(text: &str, offset_ms: f64, duration_ms: f64) -> Self {
        Self {
            text: text.to_string(),
            offset_ms,
            duration_ms,
        }
    }
}

/// A timed line of the transcript, in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub transcript: Vec<TranscriptSegment>,
    pub full_text: String,
}

impl Transcript {
    /// Convert raw millisecond segments, keeping source order. The
    /// full text is derived from the segments.
    pub fn from_raw(raw: Vec<RawSegment>) -> Self {
        let transcript: Vec<TranscriptSegment> = raw
            .into_iter()
            .map(|s| TranscriptSegment {
                text: s.text,
                start: s.offset_ms / 1000.0,
                duration: s.duration_ms / 1000.0,
            })
            .collect();
        let full_text = transcript.iter().map(|s| s.text.as_str()).join(" ");

        Self {
            transcript,
            full_text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}
