//! Mock LLM adapter for testing without API calls.
//!
//! Records every invocation so tests can assert the model was called
//! exactly once (or never) and saw the expected content.

use crate::domain::{ContentBundle, Summary, SummarizationError};
use crate::ports::LlmPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::info;

/// Mock LLM adapter.
///
/// Returns a canned summary (or a canned error) without network I/O.
pub struct MockLlmAdapter {
    response: Result<String, SummarizationError>,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl MockLlmAdapter {
    /// Mock that succeeds with the given summary text.
    pub fn with_summary(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Mock that fails with the given error on every call.
    pub fn with_error(err: SummarizationError) -> Self {
        Self {
            response: Err(err),
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// How many times `summarize` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The concatenated bundle text seen by the most recent call.
    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().ok().and_then(|g| g.clone())
    }
}

impl Default for MockLlmAdapter {
    fn default() -> Self {
        Self::with_summary("[MOCK] A clear teaching summary with a C++ example.")
    }
}

#[async_trait::async_trait]
impl LlmPort for MockLlmAdapter {
    async fn summarize(
        &self,
        bundle: &ContentBundle,
        _api_key: &str,
    ) -> Result<Summary, SummarizationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_input.lock() {
            *guard = Some(bundle.concatenated());
        }
        info!(
            fragments = bundle.fragments.len(),
            "[MOCK] Simulating model summarization"
        );
        match &self.response {
            Ok(text) => Ok(Summary { text: text.clone() }),
            Err(e) => Err(e.clone()),
        }
    }
}
