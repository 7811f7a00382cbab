//! Application configuration. API endpoint, model, fetch knobs.

use serde::Deserialize;

/// Default desktop-browser User-Agent. Some sites answer a bare client UA
/// with a block page instead of the article.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_5_1) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Groq API key prefill. Read from DSA_DIGEST_AI_API_KEY. When unset,
    /// the UI prompts for a key on every run.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat-completions endpoint. Defaults to Groq. Read from DSA_DIGEST_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "gemma-7b-it". Read from DSA_DIGEST_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// User-Agent for document fetches. Read from DSA_DIGEST_USER_AGENT.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Verify TLS certificates on document fetches (default true).
    /// Read from DSA_DIGEST_VERIFY_SSL.
    #[serde(default)]
    pub verify_ssl: Option<bool>,

    /// Caption track language for video transcripts (default "en").
    /// Read from DSA_DIGEST_TRANSCRIPT_LANG.
    #[serde(default)]
    pub transcript_lang: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("DSA_DIGEST"));
        if let Ok(path) = std::env::var("DSA_DIGEST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // DSA_DIGEST_VERIFY_SSL=false disables certificate checks on document fetches
        if let Ok(s) = std::env::var("DSA_DIGEST_VERIFY_SSL") {
            if let Ok(b) = s.parse::<bool>() {
                cfg.verify_ssl = Some(b);
            }
        }
        Ok(cfg)
    }

    /// Returns the API key prefill if configured.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("DSA_DIGEST_AI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the chat-completions URL. Defaults to the Groq endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "https://api.groq.com/openai/v1/chat/completions".to_string())
    }

    /// Returns the model name. Defaults to "gemma-7b-it".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| "gemma-7b-it".to_string())
    }

    /// Returns the document-fetch User-Agent. Defaults to a browser UA.
    pub fn user_agent_or_default(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }

    /// Returns whether TLS certificates are verified. Defaults to true.
    pub fn verify_ssl_or_default(&self) -> bool {
        self.verify_ssl.unwrap_or(true)
    }

    /// Returns the transcript language code. Defaults to "en".
    pub fn transcript_lang_or_default(&self) -> String {
        self.transcript_lang
            .clone()
            .unwrap_or_else(|| "en".to_string())
    }
}
