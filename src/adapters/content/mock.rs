//! Mock content adapter for testing without network I/O.

use crate::domain::{ContentBundle, Fragment, RetrievalError};
use crate::ports::ContentPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use url::Url;

/// Mock content retriever returning a canned bundle or a canned error.
/// Counts invocations so tests can assert retrieval was (not) reached.
pub struct MockContentAdapter {
    response: Result<ContentBundle, RetrievalError>,
    calls: AtomicUsize,
}

impl MockContentAdapter {
    /// Mock that succeeds with one fragment of the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            response: Ok(ContentBundle::single(Fragment::new(text, "mock"))),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that returns the given bundle as-is (blank bundles included).
    pub fn with_bundle(bundle: ContentBundle) -> Self {
        Self {
            response: Ok(bundle),
            calls: AtomicUsize::new(0),
        }
    }

    /// Mock that fails with the given retrieval error.
    pub fn with_error(err: RetrievalError) -> Self {
        Self {
            response: Err(err),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ContentPort for MockContentAdapter {
    async fn retrieve(&self, _target: &Url) -> Result<ContentBundle, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
