//! Headless learning client. The store holds the session state, each
//! panel is a small state machine over it, and the renderer turns the
//! panel view models into text.

pub mod api;
mod app;
pub mod panels;
mod render;
mod store;

pub use api::{HttpLearningApi, LearningApi};
pub use app::LearningApp;
pub use render::{Panel, Renderer};
pub use store::LearningStore;
