use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown content: {0}")]
    UnknownContent(String),
}
