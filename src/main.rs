//! Wiring & DI. Entry point: bootstrap adapters, inject into the service,
//! run the UI. No business logic here.

use dotenv::dotenv;
use dsa_digest::adapters::ai::GroqAdapter;
use dsa_digest::adapters::content::{FetchOptions, WebPageRetriever, YoutubeRetriever};
use dsa_digest::adapters::ui::TuiInputPort;
use dsa_digest::ports::{ContentPort, InputPort, LlmPort};
use dsa_digest::shared::AppConfig;
use dsa_digest::usecases::SummarizeService;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    dsa_digest::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();
    if cfg.ai_api_key().is_some() {
        info!("DSA_DIGEST_AI_API_KEY is set (env); key prompt will be skipped");
    }
    if !cfg.verify_ssl_or_default() {
        warn!("TLS certificate verification is disabled for document fetches");
    }

    // --- Content retrievers (one per source kind) ---
    let video: Arc<dyn ContentPort> =
        Arc::new(YoutubeRetriever::new(cfg.transcript_lang_or_default()));
    let web: Arc<dyn ContentPort> = Arc::new(WebPageRetriever::new(FetchOptions {
        verify_ssl: cfg.verify_ssl_or_default(),
        user_agent: cfg.user_agent_or_default(),
        timeout: Duration::from_secs(30),
    })?);

    // --- Hosted model adapter ---
    info!(
        model = %cfg.ai_model_or_default(),
        url = %cfg.ai_api_url_or_default(),
        "summarization via Groq-compatible endpoint"
    );
    let llm: Arc<dyn LlmPort> = Arc::new(GroqAdapter::new(
        cfg.ai_api_url_or_default(),
        cfg.ai_model_or_default(),
    ));

    // --- Service + UI ---
    let service = Arc::new(SummarizeService::new(video, web, llm));
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(service, cfg.ai_api_key()));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
