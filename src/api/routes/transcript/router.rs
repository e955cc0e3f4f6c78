//! Router for the transcript API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::youtube::{Transcript, fetch_transcript};

type SharedState = Arc<RwLock<AppState>>;

/// Fetch the transcript of a YouTube video
async fn transcript_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::TranscriptRequest>, JsonRejection>,
) -> Result<Json<Transcript>, crate::api::public::ApiError> {
    let Json(payload) = payload?;

    let fetcher = state
        .read()
        .expect("Unable to read share state")
        .transcript_fetcher
        .clone();

    let video_url = payload.video_url.unwrap_or_default();
    let transcript = fetch_transcript(fetcher.as_ref(), &video_url).await?;

    Ok(Json(transcript))
}

/// Create the transcript router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(transcript_handler))
}
