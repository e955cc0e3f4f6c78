//! Public types for the syllabus API
use serde::{Deserialize, Serialize};

pub use crate::ai::{Module, Syllabus};

#[derive(Serialize, Deserialize, Default)]
pub struct SyllabusRequest {
    pub topic: Option<String>,
}
