//! Error types for the alert pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The inbound payload matched none of the known source shapes. Fatal for
    /// that single message only; callers keep processing the rest of a batch.
    #[error("payload matches no known alert format")]
    UnrecognizedFormat,

    /// Extraction found nothing to enrich. Terminal and non-retryable for the
    /// alert in question.
    #[error("no indicators found in alert {0:?}")]
    NoSubjectsFound(String),

    /// The configured hostname pattern failed to compile.
    #[error("invalid hostname pattern: {0}")]
    InvalidHostPattern(#[from] regex::Error),

    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ticket sink error: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
