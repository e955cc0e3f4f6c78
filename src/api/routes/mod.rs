//! API routes module

pub mod health;
pub mod syllabus;
pub mod transcript;
pub mod tutor;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Syllabus generation
        .nest("/generate-syllabus", syllabus::router())
        // Transcript retrieval
        .nest("/get-transcript", transcript::router())
        // AI tutor
        .nest("/tutor", tutor::router())
        // Service status
        .nest("/health", health::router())
}
