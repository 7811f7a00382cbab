//! Groq adapter for hosted summarization.
//!
//! Talks to the Groq OpenAI-compatible chat-completions endpoint. Any
//! other OpenAI-compatible API works by pointing the URL elsewhere.
//! Implements `LlmPort` with a fixed teaching-style prompt.

use crate::domain::{ContentBundle, Summary, SummarizationError};
use crate::ports::LlmPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fixed summarization prompt. `{text}` is replaced with the full
/// concatenated content of the retrieved bundle.
const PROMPT_TEMPLATE: &str = "\
You are a coding teacher helping students solve DSA questions. Your job is to summarize the \
youtube video or article, which is an explanation of the solution to some DSA question, and \
explain it to weak students. Also provide code/codes in C++:
Content: {text}
";

/// Groq chat-completions adapter.
///
/// The API key is not held here — it arrives with each request, entered by
/// the user, and is dropped when the call returns.
pub struct GroqAdapter {
    client: reqwest::Client,
    api_url: String,
    model: String,
}

impl GroqAdapter {
    /// # Arguments
    /// * `api_url` - chat-completions endpoint (e.g. "https://api.groq.com/openai/v1/chat/completions")
    /// * `model` - model name (e.g. "gemma-7b-it")
    pub fn new(api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            model,
        }
    }

    /// Fill the prompt template with the bundle's concatenated text.
    pub(crate) fn build_prompt(bundle: &ContentBundle) -> String {
        PROMPT_TEMPLATE.replace("{text}", &bundle.concatenated())
    }

    /// Map a non-success response to the error taxonomy: 401/403 mean the
    /// key was rejected, anything else is a provider-side generation failure.
    fn map_api_error(status: u16, body: &str) -> SummarizationError {
        let preview: String = body.chars().take(200).collect();
        match status {
            401 | 403 => SummarizationError::Authentication(preview),
            _ => SummarizationError::Generation(format!("API error {}: {}", status, preview)),
        }
    }
}

/// Chat-completions request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat-completions response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl LlmPort for GroqAdapter {
    async fn summarize(
        &self,
        bundle: &ContentBundle,
        api_key: &str,
    ) -> Result<Summary, SummarizationError> {
        let prompt = Self::build_prompt(bundle);
        info!(
            model = %self.model,
            fragments = bundle.fragments.len(),
            prompt_len = prompt.len(),
            "sending content to model for summarization"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: 0.3,
        };

        // Exactly one invocation per request. Timeouts, rate limits and
        // context overflow all surface as the provider's error.
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizationError::Generation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "model API returned error");
            return Err(Self::map_api_error(status, &body));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            SummarizationError::Generation(format!("Failed to parse API response: {}", e))
        })?;

        let text = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| {
                SummarizationError::Generation("No response choices returned".to_string())
            })?;

        debug!(summary_len = text.len(), "summarization complete");

        Ok(Summary { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fragment;

    #[test]
    fn prompt_contains_bundle_text_and_instruction() {
        let bundle = ContentBundle::new(vec![
            Fragment::new("Binary search runs in O(log n)", "a"),
            Fragment::new("Use two pointers", "b"),
        ]);
        let prompt = GroqAdapter::build_prompt(&bundle);
        assert!(prompt.contains("Binary search runs in O(log n)"));
        assert!(prompt.contains("Use two pointers"));
        assert!(prompt.starts_with("You are a coding teacher"));
        assert!(prompt.contains("code/codes in C++"));
    }

    #[test]
    fn auth_errors_map_to_authentication() {
        assert!(matches!(
            GroqAdapter::map_api_error(401, "invalid api key"),
            SummarizationError::Authentication(_)
        ));
        assert!(matches!(
            GroqAdapter::map_api_error(403, "forbidden"),
            SummarizationError::Authentication(_)
        ));
    }

    #[test]
    fn other_statuses_map_to_generation_with_message() {
        let err = GroqAdapter::map_api_error(429, "rate limit reached");
        match err {
            SummarizationError::Generation(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("rate limit reached"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn response_deserializes_from_chat_payload() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"A summary."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "A summary.");
    }
}
