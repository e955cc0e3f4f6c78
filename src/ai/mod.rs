//! Syllabus generation and transcript-grounded tutoring on top of the
//! generative text APIs.
pub mod models;
pub mod prompt;
pub mod syllabus;
pub mod tutor;

pub use models::{ChatMessage, ChatRole, Module, Syllabus, TimestampReference};
pub use syllabus::{generate_syllabus, parse_syllabus};
pub use tutor::{ReplySpan, TutorAnswer, ask_tutor, extract_timestamps, split_timestamps};
