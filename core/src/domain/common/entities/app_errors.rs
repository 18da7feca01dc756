use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("LLM backend is not configured")]
    LlmUnavailable,

    #[error("LLM quota exhausted")]
    RateLimited,

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
