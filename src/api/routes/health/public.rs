//! Public types for the health API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub syllabus_configured: bool,
    pub tutor_configured: bool,
}
