use std::fmt::Display;

use super::CRLF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    OK,
    BadRequest,
    InternalServerError,
}
impl Into<u32> for StatusCode {
    fn into(self) -> u32 {
        match self {
            StatusCode::OK => 200,
            StatusCode::BadRequest => 400,
            StatusCode::InternalServerError => 500,
        }
    }
}
impl StatusCode {
    pub fn num(&self) -> u32 {
        (*self).into()
    }
    pub fn reason(&self) -> &'static str {
        match self {
            StatusCode::OK => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// First line of a response, `HTTP/1.1 200 OK`.
///
/// Parsing keeps the numeric code as-is so that the subscriber can report
/// statuses this server never sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpStatusLine {
    version: String,
    status_code: u32,
    reason: String,
}

impl HttpStatusLine {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            version: "HTTP/1.1".to_string(),
            status_code: status_code.num(),
            reason: status_code.reason().to_string(),
        }
    }
    pub fn from_str(line: &str) -> Result<Self, StatusLineError> {
        let line = line.trim_end();
        let mut iter = line.splitn(3, ' ');
        let version = iter
            .next()
            .filter(|v| v.starts_with("HTTP/"))
            .ok_or_else(|| StatusLineError::InvalidFormat(line.to_string()))?;
        let status_code = iter
            .next()
            .and_then(|code| code.parse::<u32>().ok())
            .ok_or_else(|| StatusLineError::InvalidFormat(line.to_string()))?;
        let reason = iter.next().unwrap_or_default();
        Ok(Self {
            version: version.to_string(),
            status_code,
            reason: reason.to_string(),
        })
    }
    pub fn status_code(&self) -> u32 {
        self.status_code
    }
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }
}
impl Display for HttpStatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.version, self.status_code, self.reason, CRLF
        )
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum StatusLineError {
    #[error("Invalid status line: {0}")]
    InvalidFormat(String),
    #[error("Status line longer than {0} bytes")]
    TooLong(usize),
}
