use thiserror::Error;

/// Failures the request handlers can report. Each variant maps to a
/// fixed HTTP status at the API boundary.
#[derive(Error, Debug)]
pub enum LearnError {
    /// Bad or missing caller input
    #[error("{0}")]
    Validation(String),

    /// A required credential is not configured
    #[error("{0}")]
    Config(String),

    /// Non-success response from an external service
    #[error("{0}")]
    Upstream(String),

    /// Model output that couldn't be turned into the expected shape
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template render error: {0}")]
    Template(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, LearnError>;
