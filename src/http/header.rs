use std::fmt::Display;

use super::CRLF;

/// Header fields in the order they were inserted or read.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct HttpHeader {
    headers: Vec<(String, String)>,
}

impl HttpHeader {
    pub fn new() -> Self {
        HttpHeader {
            headers: Vec::new(),
        }
    }
    /// Field names compare case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
    pub fn insert(&mut self, key: &str, value: &str) {
        self.headers.push((key.to_string(), value.to_string()));
    }
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }
    pub fn concat(&mut self, other: Self) {
        self.headers.extend(other.headers);
    }
    pub fn len(&self) -> usize {
        self.headers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
    pub fn from_line(line: &str) -> Result<Self, HttpHeaderError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut iter = line.splitn(2, ":");
        let key = iter
            .next()
            .map(str::trim)
            .filter(|k| !k.is_empty() && !k.contains(' '))
            .ok_or(HttpHeaderError::InvalidFormat(line.to_string()))?;
        let value = iter
            .next()
            .ok_or(HttpHeaderError::InvalidFormat(line.to_string()))?;
        Ok(HttpHeader::new().with(key, value.trim()))
    }
}
impl Display for HttpHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (k, v) in &self.headers {
            write!(f, "{}: {}{}", k, v, CRLF)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum HttpHeaderError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Header line longer than {0} bytes")]
    TooLong(usize),
    #[error("More than {0} header lines")]
    TooMany(usize),
    #[error("Header line is not UTF-8")]
    InvalidEncoding,
}
