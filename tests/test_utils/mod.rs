//! Test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::{Router, body::Body};

use learnpath::api::AppState;
use learnpath::api::app;
use learnpath::core::{AppConfig, Result};
use learnpath::youtube::{RawSegment, TranscriptFetcher};

/// Config with both credentials set and every upstream pointed at
/// `upstream_url`, usually a `mockito` server.
pub fn test_config(upstream_url: &str) -> AppConfig {
    AppConfig {
        perplexity_api_key: Some(String::from("test-perplexity-key")),
        perplexity_api_hostname: upstream_url.to_string(),
        perplexity_model: String::from("sonar-pro"),
        gemini_api_key: Some(String::from("test-gemini-key")),
        gemini_api_hostname: upstream_url.to_string(),
        gemini_model: String::from("gemini-1.5-flash"),
        youtube_hostname: upstream_url.to_string(),
        transcript_language: String::from("en"),
    }
}

/// Serves canned segments per video id and counts calls
#[derive(Default)]
pub struct FakeFetcher {
    pub videos: HashMap<String, Vec<RawSegment>>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn with_video(mut self, video_id: &str, segments: Vec<RawSegment>) -> Self {
        self.videos.insert(video_id.to_string(), segments);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranscriptFetcher for FakeFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<RawSegment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.videos.get(video_id).cloned().unwrap_or_default())
    }
}

/// Creates a test application router using the live YouTube fetcher
/// against `config.youtube_hostname`.
pub fn test_app(config: AppConfig) -> Router {
    app(Arc::new(RwLock::new(AppState::new(config))))
}

/// Creates a test application router that fetches transcripts from
/// `fetcher`.
pub fn test_app_with_fetcher(config: AppConfig, fetcher: Arc<FakeFetcher>) -> Router {
    let app_state = AppState::with_fetcher(config, fetcher);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
