use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use super::{
    header::{HttpHeader, HttpHeaderError},
    read_head_line,
    status_line::{HttpStatusLine, StatusCode, StatusLineError},
    HeadLine, CRLF, MAX_HEADERS, MAX_LINE_BYTES,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status_line: HttpStatusLine,
    header: HttpHeader,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status_code: StatusCode) -> Self {
        HttpResponse {
            status_line: HttpStatusLine::new(status_code),
            header: HttpHeader::new(),
            body: Vec::new(),
        }
    }
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.header.insert(key, value);
        self
    }
    /// Sets the body and its `Content-Length`.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self.header
            .insert("Content-Length", &self.body.len().to_string());
        self
    }
    pub fn status_code(&self) -> u32 {
        self.status_line.status_code()
    }
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.header.get(key)
    }
    pub fn is_error(&self) -> bool {
        self.status_line.is_error()
    }
    pub fn head_string(&self) -> String {
        format!("{}{}{}", self.status_line, self.header, CRLF)
    }
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.head_string().into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
    /// Writes head and body, then flushes so the peer sees the head at once.
    pub async fn write_to<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        writer.write_all(&self.to_bytes()).await?;
        writer.flush().await
    }
    /// Reads a status line and headers up to the blank line. The body is
    /// left in `reader`. Same line and header limits as the request side.
    pub async fn read_head<R>(reader: &mut R) -> Result<Self>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut line = String::new();
        match read_head_line(reader, &mut line).await? {
            HeadLine::Line => {}
            HeadLine::Closed => return Err(Error::ConnectionClosed),
            HeadLine::TooLong => return Err(StatusLineError::TooLong(MAX_LINE_BYTES).into()),
        }
        let status_line = HttpStatusLine::from_str(&line)?;
        let mut header = HttpHeader::new();
        loop {
            match read_head_line(reader, &mut line).await? {
                HeadLine::Line => {}
                HeadLine::Closed => break,
                HeadLine::TooLong => return Err(HttpHeaderError::TooLong(MAX_LINE_BYTES).into()),
            }
            if line == "\r\n" || line == "\n" {
                break;
            }
            if header.len() >= MAX_HEADERS {
                return Err(HttpHeaderError::TooMany(MAX_HEADERS).into());
            }
            header.concat(HttpHeader::from_line(&line)?);
        }
        Ok(HttpResponse {
            status_line,
            header,
            body: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncBufReadExt, BufReader};

    use super::*;

    #[test]
    fn 文字列に変換可能() {
        let sut = HttpResponse::new(StatusCode::OK)
            .header("Content-type", "text/html")
            .body("<p>hi</p>");

        assert_eq!(
            String::from_utf8(sut.to_bytes()).unwrap(),
            format!(
                "{}{}{}{}{}",
                "HTTP/1.1 200 OK\r\n",
                "Content-type: text/html\r\n",
                "Content-Length: 9\r\n",
                "\r\n",
                "<p>hi</p>",
            )
        );
    }
    #[test]
    fn bodyがない場合はheadのみ() {
        let sut = HttpResponse::new(StatusCode::OK).header("Content-type", "text/event-stream");

        assert_eq!(
            sut.to_bytes(),
            b"HTTP/1.1 200 OK\r\nContent-type: text/event-stream\r\n\r\n".to_vec()
        );
        assert_eq!(sut.get_header("Content-Length"), None);
    }
    #[test]
    fn errorかどうか判断できる() {
        assert!(HttpResponse::new(StatusCode::InternalServerError).is_error());
        assert!(HttpResponse::new(StatusCode::BadRequest).is_error());
        assert!(!HttpResponse::new(StatusCode::OK).is_error());
    }
    #[tokio::test]
    async fn headを読み込みbodyは残す() {
        let raw = "HTTP/1.1 200 OK\r\nContent-type: text/event-stream\r\n\r\ndata: foo\n\n";
        let mut reader = BufReader::new(raw.as_bytes());

        let sut = HttpResponse::read_head(&mut reader).await.unwrap();

        assert_eq!(sut.status_code(), 200);
        assert_eq!(sut.get_header("content-type"), Some("text/event-stream"));
        let mut rest = String::new();
        reader.read_line(&mut rest).await.unwrap();
        assert_eq!(rest, "data: foo\n");
    }
    #[tokio::test]
    async fn 書き込んだ内容を読み戻せる() {
        let sut = HttpResponse::new(StatusCode::BadRequest).header("Connection", "close");
        let mut buf = Vec::new();

        sut.write_to(&mut buf).await.unwrap();
        let result = HttpResponse::read_head(&mut BufReader::new(buf.as_slice()))
            .await
            .unwrap();

        assert_eq!(result, sut);
    }
    #[tokio::test]
    async fn 長すぎるステータス行はエラー() {
        let raw = format!("HTTP/1.1 200 {}\r\n\r\n", "O".repeat(MAX_LINE_BYTES));
        let mut reader = BufReader::new(raw.as_bytes());

        let result = HttpResponse::read_head(&mut reader).await;

        assert!(matches!(
            result,
            Err(Error::StatusLineError(StatusLineError::TooLong(_)))
        ));
    }
}
