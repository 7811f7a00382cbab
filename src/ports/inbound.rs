//! Inbound port. UI (adapter) calls into the application.

use crate::domain::PipelineError;

/// Input port: UI/CLI drives the summarization use case.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop (prompt for key + URL, summarize, render).
    async fn run(&self) -> Result<(), PipelineError>;
}
