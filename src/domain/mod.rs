//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    classify, is_youtube_host, validate, ContentBundle, Fragment, SourceKind, Summary,
    ValidatedRequest,
};
pub use errors::{PipelineError, RetrievalError, SummarizationError, ValidationError};
