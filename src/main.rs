use std::sync::Arc;

use inspireai::{
    config::{provider::ProviderConfig, server::ServerConfig},
    modules::ideas::pipeline::IdeaPipeline,
    services::llm::GeminiClient,
    AppState,
};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let server = ServerConfig::from_env()?;
    let provider = ProviderConfig::from_env()?;

    if !provider.has_api_key() {
        tracing::warn!("GOOGLE_AI_API_KEY is not set, every request will be served from fallback templates");
    }

    let client = GeminiClient::new(&provider)?;
    tracing::info!(model = client.model(), timeout_secs = provider.timeout.as_secs(), "Gemini client ready");

    let state = AppState::new(IdeaPipeline::new(Arc::new(client), provider.timeout));
    let app = inspireai::app(state, &server.public_dir);

    let listener = TcpListener::bind(server.addr()).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
