use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};

use super::response::SseResponse;
use crate::{
    error::{Error, Result},
    http::{header::HttpHeader, response::HttpResponse, CRLF},
};

/// Minimal client for reading an event stream frame by frame.
#[derive(Debug)]
pub struct SseSubscriber {
    reader: BufReader<TcpStream>,
    response: HttpResponse,
}

impl SseSubscriber {
    /// Sends `GET path` to `addr` and reads the response head.
    ///
    /// The head is returned as-is whatever its status; use
    /// [`SseSubscriber::ensure_event_stream`] to reject error statuses and
    /// anything that is not an event stream.
    pub async fn connect(addr: &str, path: &str) -> Result<Self> {
        let mut stream = TcpStream::connect(addr).await?;
        let header = HttpHeader::new()
            .with("Host", addr)
            .with("Accept", "text/event-stream");
        let request = format!("GET {} HTTP/1.1{}{}{}", path, CRLF, header, CRLF);
        stream.write_all(request.as_bytes()).await?;
        stream.flush().await?;
        let mut reader = BufReader::new(stream);
        let response = HttpResponse::read_head(&mut reader).await?;
        Ok(Self { reader, response })
    }
    pub fn response(&self) -> &HttpResponse {
        &self.response
    }
    pub fn ensure_event_stream(self) -> Result<Self> {
        let is_stream = self
            .response
            .get_header("Content-type")
            .is_some_and(|v| v.starts_with("text/event-stream"));
        if self.response.is_error() || !is_stream {
            return Err(Error::UnexpectedStatus(self.response.status_code()));
        }
        Ok(self)
    }
    /// Reads one frame, blank terminator line included.
    ///
    /// Returns `None` once the server closes the stream; a partial frame
    /// left at that point is discarded.
    pub async fn next_frame(&mut self) -> Result<Option<String>> {
        let mut frame = String::new();
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line).await? == 0 {
                return Ok(None);
            }
            frame.push_str(&line);
            if line == "\n" || line == "\r\n" {
                return Ok(Some(frame));
            }
        }
    }
    pub async fn next_event(&mut self) -> Result<Option<Vec<SseResponse>>> {
        Ok(self
            .next_frame()
            .await?
            .map(|frame| SseResponse::from_frame(&frame)))
    }
    /// Reads whatever body remains until the server closes the connection.
    pub async fn read_to_end(mut self) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        self.reader.read_to_end(&mut body).await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    async fn fake_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut line = String::new();
            while reader.read_line(&mut line).await.unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            reader.get_mut().write_all(response.as_bytes()).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn フレーム単位で読み込み切断でnoneを返す() {
        let addr = fake_server(
            "HTTP/1.1 200 OK\r\nContent-type: text/event-stream\r\n\r\ndata: baz\nfrotz\n\ndata: foo\n\n",
        )
        .await;

        let mut sut = SseSubscriber::connect(&addr, "/events")
            .await
            .unwrap()
            .ensure_event_stream()
            .unwrap();

        assert_eq!(
            sut.next_frame().await.unwrap(),
            Some("data: baz\nfrotz\n\n".to_string())
        );
        assert_eq!(
            sut.next_event().await.unwrap(),
            Some(vec![SseResponse::Data("foo".to_string())])
        );
        assert_eq!(sut.next_frame().await.unwrap(), None);
    }
    #[tokio::test]
    async fn http_errorの場合はステータスコードを返す() {
        let addr = fake_server("HTTP/1.1 500 Internal Server Error\r\nConnection: close\r\n\r\n").await;

        let sut = SseSubscriber::connect(&addr, "/").await.unwrap();
        assert_eq!(sut.response().status_code(), 500);

        let Err(Error::UnexpectedStatus(code)) = sut.ensure_event_stream() else {
            panic!("expected Err, but got Ok");
        };
        assert_eq!(code, 500);
    }
    #[tokio::test]
    async fn event_streamでない場合もエラー() {
        let addr = fake_server("HTTP/1.1 200 OK\r\nContent-type: text/html\r\n\r\n<html></html>").await;

        let sut = SseSubscriber::connect(&addr, "/").await.unwrap();

        assert!(sut.ensure_event_stream().is_err());
    }
}
