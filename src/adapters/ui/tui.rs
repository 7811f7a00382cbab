//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Mirrors the original single-page flow: enter a key and a URL, press
//! enter, watch a spinner, read the summary (or a specific error message).

use crate::domain::{classify, PipelineError, SourceKind, ValidationError};
use crate::ports::InputPort;
use crate::usecases::{SummarizeService, SummaryReport};
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Text};
use std::sync::Arc;
use std::time::Duration;

/// TUI adapter. Inquire prompts around the summarize pipeline.
pub struct TuiInputPort {
    service: Arc<SummarizeService>,
    /// API key prefill from config; when set, the key prompt is skipped.
    key_prefill: Option<String>,
}

impl TuiInputPort {
    pub fn new(service: Arc<SummarizeService>, key_prefill: Option<String>) -> Self {
        Self {
            service,
            key_prefill,
        }
    }

    fn prompt_key(&self) -> Result<String, InquireError> {
        if let Some(key) = &self.key_prefill {
            println!("{}", "Using Groq API key from environment.".dark_grey());
            return Ok(key.clone());
        }
        Password::new("Groq API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
    }

    fn prompt_url(&self) -> Result<String, InquireError> {
        Text::new("URL (YouTube or website):")
            .with_placeholder("https://example.com")
            .prompt()
    }

    fn spinner() -> ProgressBar {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| {
                ProgressStyle::default_spinner()
            }),
        );
        bar.set_message("Summarizing content...");
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

    fn print_detection(kind: SourceKind) {
        let msg = match kind {
            SourceKind::Video => "Detected a YouTube URL. Loading video content...",
            SourceKind::Document => "Detected a website URL. Loading webpage content...",
        };
        println!("{}", msg.cyan());
    }

    fn print_report(report: &SummaryReport) {
        println!("{}", "Summary generated successfully!".green().bold());
        println!();
        println!("{}", "Summary:".bold());
        println!("{}", report.summary.text);
        println!();
    }

    /// One message per error kind, matching the original's user-facing
    /// outcomes. Unclassified failures fall through with their message.
    fn print_error(err: &PipelineError) {
        let msg = match err {
            PipelineError::Validation(ValidationError::MissingCredential) => {
                "Please enter your Groq API key.".to_string()
            }
            PipelineError::Validation(ValidationError::MissingUrl) => {
                "Please provide a URL (YouTube or website).".to_string()
            }
            PipelineError::Validation(ValidationError::MalformedUrl) => {
                "Please enter a valid URL.".to_string()
            }
            PipelineError::Retrieval(e) => format!(
                "Could not retrieve content from the URL: {}. Please check if the URL is correct.",
                e
            ),
            PipelineError::Summarization(e) => format!("Summarization failed: {}", e),
            PipelineError::Other(msg) => format!("Unexpected error: {}", msg),
        };
        eprintln!("{}", msg.red());
    }

    /// One prompt-summarize-render round. Returns false when the user is done.
    async fn round(&self) -> Result<bool, InquireError> {
        let credential = self.prompt_key()?;
        let target = self.prompt_url()?;

        match SummarizeService::validate(&credential, &target) {
            Ok(request) => {
                Self::print_detection(classify(&request.target));
                let bar = Self::spinner();
                let outcome = self.service.run(request).await;
                bar.finish_and_clear();
                match outcome {
                    Ok(report) => Self::print_report(&report),
                    Err(e) => Self::print_error(&e),
                }
            }
            Err(e) => Self::print_error(&e.into()),
        }

        Confirm::new("Summarize another URL?")
            .with_default(true)
            .prompt()
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), PipelineError> {
        loop {
            match self.round().await {
                Ok(true) => continue,
                Ok(false) => break,
                // Esc / Ctrl-C exits the loop instead of erroring out.
                Err(InquireError::OperationCanceled)
                | Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(PipelineError::Other(e.to_string())),
            }
        }
        println!("{}", "Bye.".dark_grey());
        Ok(())
    }
}
