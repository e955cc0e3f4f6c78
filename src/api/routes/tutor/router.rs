//! Router for the tutor API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};

use super::public;
use crate::ai::ask_tutor;
use crate::api::state::AppState;
use crate::core::AppConfig;

type SharedState = Arc<RwLock<AppState>>;

/// Answer a question about a video using its transcript
async fn tutor_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::TutorRequest>, JsonRejection>,
) -> Result<Json<public::TutorResponse>, crate::api::public::ApiError> {
    let Json(payload) = payload?;

    let (api_hostname, api_key, model) = {
        let shared_state = state.read().expect("Unable to read share state");
        let AppConfig {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            ..
        } = &shared_state.config;
        (
            gemini_api_hostname.clone(),
            gemini_api_key.clone(),
            gemini_model.clone(),
        )
    };

    let question = payload.question.unwrap_or_default();
    let transcript = payload.transcript.unwrap_or_default();
    let chat_history = payload.chat_history.unwrap_or_default();
    let answer = ask_tutor(
        &question,
        &transcript,
        &chat_history,
        &api_hostname,
        api_key.as_deref(),
        &model,
    )
    .await?;

    Ok(Json(answer))
}

/// Create the tutor router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(tutor_handler))
}
