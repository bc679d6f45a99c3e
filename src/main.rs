use anyhow::Context;
use random_sse::{logging::init_tracing, ServerConfig, SseServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("failed to load configuration")?;
    init_tracing(&config);
    let server = SseServer::bind(&config)
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;
    server.start().await?;
    Ok(())
}
