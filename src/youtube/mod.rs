//! YouTube video ids and caption transcripts
mod models;
mod transcript;
mod video;

pub use models::{RawSegment, Transcript, TranscriptSegment};
pub use transcript::{
    BoxedTranscriptFetcher, TranscriptFetcher, YoutubeTranscriptFetcher, fetch_transcript,
};
pub use video::{embed_url, extract_video_id, watch_url};
