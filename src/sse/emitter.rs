use rand::Rng;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::event::{choose_delay, choose_payload};

/// Drives one connection's event stream.
///
/// Each emitter owns its random generator, so connections never share or
/// contend on random state.
#[derive(Debug)]
pub struct SseEmitter<R: Rng> {
    rng: R,
    sent: u64,
}

impl<R: Rng> SseEmitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, sent: 0 }
    }
    pub fn sent(&self) -> u64 {
        self.sent
    }
    /// Writes frames forever, sleeping a random delay between them.
    ///
    /// Only returns when a write or flush fails, which is how a closed peer
    /// shows up. Every frame goes out with a single `write_all` so a frame
    /// is never split by this loop.
    pub async fn run<W>(&mut self, writer: &mut W) -> std::io::Error
    where
        W: AsyncWrite + Unpin,
    {
        loop {
            let payload = choose_payload(&mut self.rng);
            if let Err(e) = Self::write_frame(writer, payload.as_bytes()).await {
                return e;
            }
            self.sent += 1;
            tracing::debug!(event = ?payload, sent = self.sent, "emitted event");
            let delay = choose_delay(&mut self.rng);
            tokio::time::sleep(delay).await;
        }
    }
    async fn write_frame<W>(writer: &mut W, frame: &[u8]) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        writer.write_all(frame).await?;
        writer.flush().await
    }
}
