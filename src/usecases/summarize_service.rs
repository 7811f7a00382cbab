//! Summarization service. Orchestrates the content-to-summary pipeline.
//!
//! Flow is strictly forward: validate -> classify -> retrieve -> summarize.
//! No stage loops back, retries, or runs concurrently with another; the
//! first error is terminal for the request.

use crate::domain::{
    classify, validate, PipelineError, RetrievalError, SourceKind, Summary, ValidatedRequest,
    ValidationError,
};
use crate::ports::{ContentPort, LlmPort};
use std::sync::Arc;
use tracing::info;

/// Outcome of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub kind: SourceKind,
    pub summary: Summary,
}

/// Pipeline over the two retrieval ports and the model port.
///
/// Ports are injected; the service never reads ambient state. The
/// credential travels inside the request and is read once, at the
/// summarization call.
pub struct SummarizeService {
    video: Arc<dyn ContentPort>,
    web: Arc<dyn ContentPort>,
    llm: Arc<dyn LlmPort>,
}

impl SummarizeService {
    pub fn new(
        video: Arc<dyn ContentPort>,
        web: Arc<dyn ContentPort>,
        llm: Arc<dyn LlmPort>,
    ) -> Self {
        Self { video, web, llm }
    }

    /// Validate raw caller inputs. No I/O; delegates to the domain rule.
    pub fn validate(credential: &str, target: &str) -> Result<ValidatedRequest, ValidationError> {
        validate(credential, target)
    }

    /// Run the pipeline for an already-validated request.
    pub async fn run(&self, request: ValidatedRequest) -> Result<SummaryReport, PipelineError> {
        let kind = classify(&request.target);
        info!(host = %request.target.host_str().unwrap_or(""), ?kind, "source classified");

        let retriever = match kind {
            SourceKind::Video => &self.video,
            SourceKind::Document => &self.web,
        };
        let bundle = retriever.retrieve(&request.target).await?;

        // Defense at the seam: an adapter returning a blank bundle is the
        // same terminal condition as extracting nothing.
        if bundle.is_blank() {
            return Err(RetrievalError::EmptyContent.into());
        }

        let summary = self.llm.summarize(&bundle, &request.credential).await?;
        info!(summary_len = summary.text.len(), "pipeline complete");

        Ok(SummaryReport { kind, summary })
    }

    /// End-to-end entry: validate then run.
    pub async fn summarize_url(
        &self,
        credential: &str,
        target: &str,
    ) -> Result<SummaryReport, PipelineError> {
        let request = Self::validate(credential, target)?;
        self.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockLlmAdapter;
    use crate::adapters::content::MockContentAdapter;
    use crate::domain::{ContentBundle, Fragment, SummarizationError};

    struct Harness {
        video: Arc<MockContentAdapter>,
        web: Arc<MockContentAdapter>,
        llm: Arc<MockLlmAdapter>,
        service: SummarizeService,
    }

    fn harness(
        video: MockContentAdapter,
        web: MockContentAdapter,
        llm: MockLlmAdapter,
    ) -> Harness {
        let video = Arc::new(video);
        let web = Arc::new(web);
        let llm = Arc::new(llm);
        let service = SummarizeService::new(
            Arc::clone(&video) as Arc<dyn ContentPort>,
            Arc::clone(&web) as Arc<dyn ContentPort>,
            Arc::clone(&llm) as Arc<dyn LlmPort>,
        );
        Harness {
            video,
            web,
            llm,
            service,
        }
    }

    #[tokio::test]
    async fn document_url_flows_to_summary() {
        // Scenario A: valid key + article URL -> document retrieval -> summary.
        let h = harness(
            MockContentAdapter::with_text("unused"),
            MockContentAdapter::with_text("Binary search runs in O(log n)..."),
            MockLlmAdapter::with_summary("Here is how binary search works."),
        );

        let report = h
            .service
            .summarize_url("sk-valid", "https://example.com/article")
            .await
            .unwrap();

        assert_eq!(report.kind, SourceKind::Document);
        assert!(!report.summary.text.is_empty());
        assert_eq!(h.web.call_count(), 1);
        assert_eq!(h.video.call_count(), 0);
        assert_eq!(h.llm.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_credential_stops_before_any_network_call() {
        // Scenario B: empty key -> validation fails, no port is touched.
        let h = harness(
            MockContentAdapter::with_text("transcript"),
            MockContentAdapter::with_text("page"),
            MockLlmAdapter::default(),
        );

        let err = h
            .service
            .summarize_url("", "https://youtube.com/watch?v=abc")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::MissingCredential)
        ));
        assert_eq!(h.video.call_count(), 0);
        assert_eq!(h.web.call_count(), 0);
        assert_eq!(h.llm.call_count(), 0);
    }

    #[tokio::test]
    async fn schemeless_url_fails_validation() {
        // "youtube.com/watch?v=xyz" has no scheme: rejected before retrieval.
        let h = harness(
            MockContentAdapter::with_text("transcript"),
            MockContentAdapter::with_text("page"),
            MockLlmAdapter::default(),
        );

        let err = h
            .service
            .summarize_url("sk-valid", "youtube.com/watch?v=xyz")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Validation(ValidationError::MalformedUrl)
        ));
        assert_eq!(h.video.call_count(), 0);
        assert_eq!(h.llm.call_count(), 0);
    }

    #[tokio::test]
    async fn transcript_unavailable_never_reaches_the_model() {
        // Scenario C: video with no transcript -> retrieval error, no summarize.
        let h = harness(
            MockContentAdapter::with_error(RetrievalError::TranscriptUnavailable),
            MockContentAdapter::with_text("page"),
            MockLlmAdapter::default(),
        );

        let err = h
            .service
            .summarize_url("sk-valid", "https://youtube.com/watch?v=xyz")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Retrieval(RetrievalError::TranscriptUnavailable)
        ));
        assert_eq!(h.video.call_count(), 1);
        assert_eq!(h.llm.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_bundle_is_empty_content() {
        let h = harness(
            MockContentAdapter::with_text("unused"),
            MockContentAdapter::with_bundle(ContentBundle::single(Fragment::new("  ", "x"))),
            MockLlmAdapter::default(),
        );

        let err = h
            .service
            .summarize_url("sk-valid", "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Retrieval(RetrievalError::EmptyContent)
        ));
        assert_eq!(h.llm.call_count(), 0);
    }

    #[tokio::test]
    async fn model_is_called_exactly_once_with_the_retrieved_text() {
        let h = harness(
            MockContentAdapter::with_text("unused"),
            MockContentAdapter::with_text("T"),
            MockLlmAdapter::with_summary("ok"),
        );

        h.service
            .summarize_url("sk-valid", "https://example.com")
            .await
            .unwrap();

        assert_eq!(h.llm.call_count(), 1);
        assert_eq!(h.llm.last_input().as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn authentication_failure_propagates() {
        let h = harness(
            MockContentAdapter::with_text("unused"),
            MockContentAdapter::with_text("page"),
            MockLlmAdapter::with_error(SummarizationError::Authentication(
                "invalid api key".into(),
            )),
        );

        let err = h
            .service
            .summarize_url("sk-bad", "https://example.com")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Summarization(SummarizationError::Authentication(_))
        ));
    }
}
