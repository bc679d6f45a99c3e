use std::io::ErrorKind;

use tokio::io::AsyncBufRead;

use super::{
    header::{HttpHeader, HttpHeaderError},
    read_head_line, HeadLine, MAX_HEADERS, MAX_LINE_BYTES,
};
use crate::error::{Error, Result};

/// `GET /events?x=1 HTTP/1.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    version: String,
}

impl RequestLine {
    pub fn from_line(line: &str) -> std::result::Result<Self, RequestLineError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let parts = line.split(' ').collect::<Vec<_>>();
        let [method, target, version] = parts.as_slice() else {
            return Err(RequestLineError::InvalidFormat(line.to_string()));
        };
        if method.is_empty() || !target.starts_with('/') || !version.starts_with("HTTP/") {
            return Err(RequestLineError::InvalidFormat(line.to_string()));
        }
        Ok(Self {
            method: method.to_string(),
            target: target.to_string(),
            version: version.to_string(),
        })
    }
    pub fn method(&self) -> &str {
        &self.method
    }
    pub fn target(&self) -> &str {
        &self.target
    }
    pub fn version(&self) -> &str {
        &self.version
    }
    /// Target without its query string.
    pub fn path(&self) -> &str {
        self.target
            .split_once('?')
            .map_or(self.target.as_str(), |(path, _)| path)
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RequestLineError {
    #[error("Invalid request line: {0}")]
    InvalidFormat(String),
    #[error("Request line longer than {0} bytes")]
    TooLong(usize),
    #[error("Request line is not UTF-8")]
    InvalidEncoding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    request_line: RequestLine,
    header: HttpHeader,
}

impl HttpRequest {
    /// Reads a request head up to and including the blank line.
    ///
    /// Returns [`Error::ConnectionClosed`] when the peer hangs up before the
    /// request line arrives. Any body is left unread. Lines are capped at
    /// [`MAX_LINE_BYTES`] and headers at [`MAX_HEADERS`]; past either limit,
    /// or on bytes that are not UTF-8, reading stops with a parse error.
    pub async fn read_from<R>(reader: &mut R) -> Result<Self>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut line = String::new();
        match read_head_line(reader, &mut line).await {
            Ok(HeadLine::Line) => {}
            Ok(HeadLine::Closed) => return Err(Error::ConnectionClosed),
            Ok(HeadLine::TooLong) => return Err(RequestLineError::TooLong(MAX_LINE_BYTES).into()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(RequestLineError::InvalidEncoding.into())
            }
            Err(e) => return Err(e.into()),
        }
        let request_line = RequestLine::from_line(&line)?;
        let mut header = HttpHeader::new();
        loop {
            match read_head_line(reader, &mut line).await {
                Ok(HeadLine::Line) => {}
                Ok(HeadLine::Closed) => break,
                Ok(HeadLine::TooLong) => return Err(HttpHeaderError::TooLong(MAX_LINE_BYTES).into()),
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(HttpHeaderError::InvalidEncoding.into())
                }
                Err(e) => return Err(e.into()),
            }
            if line == "\r\n" || line == "\n" {
                break;
            }
            if header.len() >= MAX_HEADERS {
                return Err(HttpHeaderError::TooMany(MAX_HEADERS).into());
            }
            header.concat(HttpHeader::from_line(&line)?);
        }
        Ok(Self {
            request_line,
            header,
        })
    }
    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }
    pub fn path(&self) -> &str {
        self.request_line.path()
    }
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.header.get(key)
    }
}
