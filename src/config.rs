//! Server settings loaded with figment.
//!
//! Sources, lowest priority first: built-in defaults, `random-sse.toml` in the
//! working directory (optional), `RANDOM_SSE_*` environment variables.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE: &str = "random-sse.toml";
pub const ENV_PREFIX: &str = "RANDOM_SSE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HTML page served at `/`.
    pub index_path: PathBuf,
    /// `EnvFilter` directive, e.g. `info` or `random_sse=debug`.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6999,
            index_path: PathBuf::from("sse.html"),
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Self::figment(path).extract()?;
        Ok(config)
    }
    fn figment(path: &str) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ServerConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
