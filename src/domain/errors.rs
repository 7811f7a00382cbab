//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every error is terminal
//! for the current request; nothing is retried.

use thiserror::Error;

/// Input validation failures. Reported before any I/O happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API key is missing")]
    MissingCredential,

    #[error("URL is missing")]
    MissingUrl,

    #[error("URL is not a valid http(s) URL")]
    MalformedUrl,
}

/// Content retrieval failures. A single failed attempt aborts the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("URL does not point to a playable video")]
    InvalidVideoUrl,

    #[error("no transcript or captions are available for this video")]
    TranscriptUnavailable,

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Http(u16),

    #[error("no text could be extracted from the URL")]
    EmptyContent,
}

/// Hosted-model failures. Provider messages are preserved verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizationError {
    #[error("API key was rejected: {0}")]
    Authentication(String),

    #[error("generation failed: {0}")]
    Generation(String),
}

/// Top-level pipeline error. The `Other` arm is the explicit catch-all:
/// any unclassified failure surfaces with its message intact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Summarization(#[from] SummarizationError),

    #[error("{0}")]
    Other(String),
}
