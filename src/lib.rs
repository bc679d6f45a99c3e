//! Server-Sent Events demo: a server that streams randomly chosen frames at
//! random intervals, and a small subscriber to read them.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod sse;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use sse::{server::SseServer, subscriber::SseSubscriber};
