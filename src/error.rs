use crate::http::{
    header::HttpHeaderError, request::RequestLineError, status_line::StatusLineError,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IOError: {0}")]
    IOError(#[from] std::io::Error),
    #[error("ConfigError: {0}")]
    ConfigError(#[from] Box<figment::Error>),
    #[error("RequestLineError: {0}")]
    RequestLineError(#[from] RequestLineError),
    #[error("StatusLineError: {0}")]
    StatusLineError(#[from] StatusLineError),
    #[error("HttpHeaderError: {0}")]
    HttpHeaderError(#[from] HttpHeaderError),
    #[error("ConnectionClosed: peer closed before the message head arrived")]
    ConnectionClosed,
    #[error("UnexpectedStatus: {0}")]
    UnexpectedStatus(u32),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
