use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};

use rand::{rngs::StdRng, SeedableRng};
use tokio::{
    io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    net::{TcpListener, TcpStream},
};
use tracing::Instrument;

use super::emitter::SseEmitter;
use crate::{
    config::ServerConfig,
    error::{Error, Result},
    http::{request::HttpRequest, response::HttpResponse, status_line::StatusCode},
};

pub const ROOT_PATH: &str = "/";

/// Serves the HTML page at `/` and a random event stream on every other
/// path. Each connection runs in its own task.
#[derive(Debug)]
pub struct SseServer {
    listener: TcpListener,
    index_path: Arc<PathBuf>,
}

impl SseServer {
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let listener = TcpListener::bind(config.addr()).await?;
        Ok(Self {
            listener,
            index_path: Arc::new(config.index_path.clone()),
        })
    }
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }
    /// Accepts connections until the process ends.
    pub async fn start(self) -> Result<()> {
        tracing::info!(addr = %self.local_addr()?, "listening");
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::warn!(error = %e, "accept failed");
                    continue;
                }
            };
            disable_nagle(&stream, peer);
            let index_path = Arc::clone(&self.index_path);
            tokio::spawn(
                async move {
                    match Self::handle_connection(stream, &index_path).await {
                        Ok(()) => tracing::debug!("connection closed"),
                        Err(Error::ConnectionClosed) => {
                            tracing::debug!("closed before sending a request")
                        }
                        Err(e) => tracing::warn!(error = %e, "connection failed"),
                    }
                }
                .instrument(tracing::info_span!("connection", %peer)),
            );
        }
    }
    /// Serves one request on `stream`. For event streams this only returns
    /// once the peer is gone; the stream is dropped on every exit path.
    pub async fn handle_connection<S>(stream: S, index_path: &Path) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut stream = BufReader::new(stream);
        let request = match HttpRequest::read_from(&mut stream).await {
            Ok(request) => request,
            Err(e @ (Error::RequestLineError(_) | Error::HttpHeaderError(_))) => {
                Self::bad_request().write_to(&mut stream).await?;
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        tracing::debug!(
            method = request.request_line().method(),
            target = request.request_line().target(),
            "request"
        );
        if request.path() == ROOT_PATH {
            Self::index(index_path).await.write_to(&mut stream).await?;
            stream.shutdown().await?;
            return Ok(());
        }
        Self::event_stream_head().write_to(&mut stream).await?;
        let mut emitter = SseEmitter::new(StdRng::from_rng(&mut rand::rng()));
        let e = emitter.run(&mut stream).await;
        tracing::debug!(error = %e, sent = emitter.sent(), "client went away");
        Ok(())
    }
    async fn index(index_path: &Path) -> HttpResponse {
        match tokio::fs::read(index_path).await {
            Ok(body) => HttpResponse::new(StatusCode::OK)
                .header("Content-type", "text/html")
                .header("Connection", "close")
                .body(body),
            Err(e) => {
                tracing::warn!(path = %index_path.display(), error = %e, "cannot read index page");
                HttpResponse::new(StatusCode::InternalServerError)
                    .header("Content-type", "text/plain")
                    .header("Connection", "close")
                    .body("Internal Server Error\n")
            }
        }
    }
    fn event_stream_head() -> HttpResponse {
        HttpResponse::new(StatusCode::OK)
            .header("Content-type", "text/event-stream")
            .header("Cache-Control", "no-cache")
            .header("Connection", "close")
    }
    fn bad_request() -> HttpResponse {
        HttpResponse::new(StatusCode::BadRequest)
            .header("Content-type", "text/plain")
            .header("Connection", "close")
            .body("Bad Request\n")
    }
}

/// Frames are small and sent one at a time, so they go out without batching.
fn disable_nagle(stream: &TcpStream, peer: SocketAddr) {
    if let Err(e) = stream.set_nodelay(true) {
        tracing::warn!(%peer, error = %e, "cannot disable Nagle's algorithm");
    }
}
