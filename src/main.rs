use anyhow::Context;

use visa_assist::config::{AffirmationConfig, ServerConfig};
use visa_assist::llm::{LlmConfig, create_provider};
use visa_assist::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install rustls crypto provider before any TLS usage
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    // A missing .env file is fine; real deployments set the environment directly.
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let server_config = ServerConfig::from_env().context("invalid server configuration")?;
    let llm_config = LlmConfig::from_env().context("invalid LLM configuration")?;

    eprintln!("🛂 Visa Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", llm_config.model);
    eprintln!("   Listening: http://{}", server_config.bind_addr());
    eprintln!("   Chatbot API: POST {}/chatbot", server::API_PREFIX);
    eprintln!("   Affirmation API: POST {}/affirmation\n", server::API_PREFIX);

    let llm = create_provider(&llm_config).context("failed to create LLM provider")?;
    let app = server::app(llm, AffirmationConfig::default());

    server::serve(&server_config, app).await?;
    Ok(())
}
