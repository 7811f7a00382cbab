//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ContentBundle, RetrievalError, Summary, SummarizationError};
use url::Url;

/// Content retrieval gateway. One implementation per source kind; the
/// pipeline selects which to call after classifying the target.
///
/// Performs outbound network I/O. A single failed attempt is terminal for
/// the request — adapters do not retry.
#[async_trait::async_trait]
pub trait ContentPort: Send + Sync {
    /// Fetch the textual content behind `target`. Must return a bundle
    /// with at least one non-blank fragment, or a [`RetrievalError`].
    async fn retrieve(&self, target: &Url) -> Result<ContentBundle, RetrievalError>;
}

/// Hosted text-generation gateway.
#[async_trait::async_trait]
pub trait LlmPort: Send + Sync {
    /// Summarize the bundle's full concatenated text in one model call.
    ///
    /// The credential flows per call — it is supplied at request time and
    /// never stored by the application. No streaming, no chunking: an
    /// over-long prompt is the provider's failure mode.
    async fn summarize(
        &self,
        bundle: &ContentBundle,
        api_key: &str,
    ) -> Result<Summary, SummarizationError>;
}
