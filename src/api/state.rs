use crate::core::AppConfig;
use crate::youtube::{BoxedTranscriptFetcher, YoutubeTranscriptFetcher};

use std::sync::Arc;

pub struct AppState {
    pub config: AppConfig,
    // Source of video captions for the transcript handler
    pub transcript_fetcher: BoxedTranscriptFetcher,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let transcript_fetcher = Arc::new(YoutubeTranscriptFetcher::new(
            &config.youtube_hostname,
            &config.transcript_language,
        ));
        Self::with_fetcher(config, transcript_fetcher)
    }

    pub fn with_fetcher(config: AppConfig, transcript_fetcher: BoxedTranscriptFetcher) -> Self {
        Self {
            config,
            transcript_fetcher,
        }
    }
}
