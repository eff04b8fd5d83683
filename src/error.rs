use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid generator: {0}")]
    InvalidGenerator(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
