//! Router for the syllabus API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};
use serde_json::Value;

use super::public;
use crate::ai::generate_syllabus;
use crate::api::state::AppState;
use crate::core::AppConfig;

type SharedState = Arc<RwLock<AppState>>;

/// Generate a syllabus for the requested topic
async fn syllabus_handler(
    State(state): State<SharedState>,
    payload: Result<Json<public::SyllabusRequest>, JsonRejection>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    let Json(payload) = payload?;

    let (api_hostname, api_key, model) = {
        let shared_state = state.read().expect("Unable to read share state");
        let AppConfig {
            perplexity_api_hostname,
            perplexity_api_key,
            perplexity_model,
            ..
        } = &shared_state.config;
        (
            perplexity_api_hostname.clone(),
            perplexity_api_key.clone(),
            perplexity_model.clone(),
        )
    };

    let topic = payload.topic.unwrap_or_default();
    let syllabus = generate_syllabus(&topic, &api_hostname, api_key.as_deref(), &model).await?;

    Ok(Json(syllabus))
}

/// Create the syllabus router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(syllabus_handler))
}
