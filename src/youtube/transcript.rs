//! Caption fetching. The watch page embeds the list of caption
//! tracks in its player config; each track's `baseUrl` serves the
//! timed text, which is requested in the `json3` format so offsets
//! and durations arrive in milliseconds.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::models::{RawSegment, Transcript};
use super::video::extract_video_id;
use crate::core::{LearnError, Result};

/// Retrieves the timed caption segments of a video. An empty result
/// means the video has no transcript.
#[async_trait]
pub trait TranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<RawSegment>>;
}

pub type BoxedTranscriptFetcher = Arc<dyn TranscriptFetcher + Send + Sync + 'static>;

#[derive(Clone, Debug)]
pub struct YoutubeTranscriptFetcher {
    hostname: String,
    language: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
}

#[derive(Deserialize, Debug)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: f64,
    #[serde(default)]
    d_duration_ms: f64,
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Deserialize, Debug)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

impl YoutubeTranscriptFetcher {
    pub fn new(hostname: &str, language: &str) -> Self {
        Self {
            hostname: hostname.trim_end_matches('/').to_string(),
            language: language.to_string(),
        }
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = reqwest::Client::new()
            .get(url)
            .query(query)
            .header("Accept-Language", &self.language)
            .timeout(Duration::from_secs(60))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LearnError::Upstream(format!(
                "YouTube error: {}",
                status.canonical_reason().unwrap_or(status.as_str())
            )));
        }

        Ok(response.text().await?)
    }

    fn pick_track(&self, tracks: Vec<CaptionTrack>) -> Option<CaptionTrack> {
        let preferred = tracks
            .iter()
            .position(|t| t.language_code == self.language)
            .unwrap_or(0);
        tracks.into_iter().nth(preferred)
    }
}

/// Find the caption tracks embedded in a watch page. Returns `None`
/// when the page has no caption config at all.
fn caption_tracks(html: &str) -> Result<Option<Vec<CaptionTrack>>> {
    let Some(idx) = html.find("\"captions\":") else {
        return Ok(None);
    };
    let rest = &html[idx + "\"captions\":".len()..];

    // Only the first JSON value is read, whatever follows it in the
    // page is ignored.
    let captions: Value = match serde_json::Deserializer::from_str(rest)
        .into_iter::<Value>()
        .next()
    {
        Some(value) => value?,
        None => return Ok(None),
    };

    let tracks = captions["playerCaptionsTracklistRenderer"]["captionTracks"].clone();
    if tracks.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(tracks)?))
}

fn segments_from_timed_text(body: &str) -> Result<Vec<RawSegment>> {
    let timed_text: TimedText = serde_json::from_str(body)?;
    let segments = timed_text
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs?
                .into_iter()
                .map(|s| s.utf8)
                .collect::<String>()
                .replace('\n', " ");
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(RawSegment::new(text, event.t_start_ms, event.d_duration_ms))
        })
        .collect();
    Ok(segments)
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<RawSegment>> {
        let watch_url = format!("{}/watch", self.hostname);
        let html = self.get(&watch_url, &[("v", video_id)]).await?;

        if html.contains("class=\"g-recaptcha\"") {
            return Err(LearnError::Upstream(
                "YouTube is receiving too many requests from this address".to_string(),
            ));
        }

        let Some(tracks) = caption_tracks(&html)? else {
            tracing::debug!("No captions found for video {}", video_id);
            return Ok(Vec::new());
        };
        let Some(track) = self.pick_track(tracks) else {
            return Ok(Vec::new());
        };

        let track_url = if track.base_url.starts_with('/') {
            format!("{}{}", self.hostname, track.base_url)
        } else {
            track.base_url
        };
        tracing::debug!(
            "Fetching {} captions for video {}",
            track.language_code,
            video_id
        );
        let body = self.get(&track_url, &[("fmt", "json3")]).await?;

        segments_from_timed_text(&body)
    }
}

/// Resolve the video behind `video_url` and fetch its transcript.
/// Nothing is fetched when the URL isn't a recognized YouTube URL, and
/// every call fetches again.
pub async fn fetch_transcript(
    fetcher: &(dyn TranscriptFetcher + Send + Sync),
    video_url: &str,
) -> Result<Transcript> {
    if video_url.trim().is_empty() {
        return Err(LearnError::Validation("video_url is required".to_string()));
    }
    let video_id = extract_video_id(video_url)
        .ok_or_else(|| LearnError::Validation("Invalid YouTube URL".to_string()))?;

    let segments = fetcher.fetch(video_id).await?;
    if segments.is_empty() {
        return Err(LearnError::NotFound(
            "Transcript not available for this video".to_string(),
        ));
    }

    Ok(Transcript::from_raw(segments))
}
