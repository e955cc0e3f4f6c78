//! Router for the health API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::get};

use super::public::HealthResponse;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Report whether the upstream credentials are configured
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let shared_state = state.read().expect("Unable to read share state");
    Json(HealthResponse {
        status: String::from("ok"),
        syllabus_configured: shared_state.config.perplexity_api_key.is_some(),
        tutor_configured: shared_state.config.gemini_api_key.is_some(),
    })
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(health))
}
