//! Prints the data lines of every frame from a running server.
//!
//! Usage: `client [PATH]`, `PATH` defaults to `/events`.

use anyhow::Context;
use random_sse::{logging::init_tracing, sse::response::SseResponse, ServerConfig, SseSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("failed to load configuration")?;
    init_tracing(&config);
    let path = std::env::args().nth(1).unwrap_or_else(|| "/events".to_string());
    let addr = config.addr();
    let mut subscriber = SseSubscriber::connect(&addr, &path)
        .await
        .with_context(|| format!("failed to connect to {}", addr))?
        .ensure_event_stream()?;
    tracing::info!(%addr, %path, "subscribed");
    while let Some(event) = subscriber.next_event().await? {
        for line in event {
            match line {
                SseResponse::Data(data) => println!("{}", data),
                other => tracing::debug!(line = ?other, "ignored line"),
            }
        }
    }
    tracing::info!("server closed the stream");
    Ok(())
}
