use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

pub mod header;
pub mod request;
pub mod response;
pub mod status_line;

pub const CRLF: &str = "\r\n";
/// Longest start line or header line accepted, terminator included.
pub const MAX_LINE_BYTES: usize = 8 * 1024;
pub const MAX_HEADERS: usize = 100;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum HeadLine {
    Line,
    Closed,
    TooLong,
}

/// Replaces `line` with the next head line, reading at most
/// [`MAX_LINE_BYTES`] from `reader`.
///
/// Bytes that are not UTF-8 surface as `ErrorKind::InvalidData`.
pub(crate) async fn read_head_line<R>(reader: &mut R, line: &mut String) -> std::io::Result<HeadLine>
where
    R: AsyncBufRead + Unpin,
{
    line.clear();
    let len = (&mut *reader)
        .take(MAX_LINE_BYTES as u64)
        .read_line(line)
        .await?;
    if len == 0 {
        return Ok(HeadLine::Closed);
    }
    if len >= MAX_LINE_BYTES && !line.ends_with('\n') {
        return Ok(HeadLine::TooLong);
    }
    Ok(HeadLine::Line)
}

#[cfg(test)]
mod tests {
    use tokio::io::BufReader;

    use super::*;

    #[tokio::test]
    async fn 上限を超える行は途中で読むのをやめる() {
        let raw = "A".repeat(MAX_LINE_BYTES * 4);
        let mut reader = BufReader::new(raw.as_bytes());
        let mut line = String::new();

        let sut = read_head_line(&mut reader, &mut line).await.unwrap();

        assert_eq!(sut, HeadLine::TooLong);
        assert_eq!(line.len(), MAX_LINE_BYTES);
    }
    #[tokio::test]
    async fn 上限ちょうどの行は読める() {
        let raw = format!("{}\n", "A".repeat(MAX_LINE_BYTES - 1));
        let mut reader = BufReader::new(raw.as_bytes());
        let mut line = String::new();

        let sut = read_head_line(&mut reader, &mut line).await.unwrap();

        assert_eq!(sut, HeadLine::Line);
        assert_eq!(
            read_head_line(&mut reader, &mut line).await.unwrap(),
            HeadLine::Closed
        );
    }
    #[tokio::test]
    async fn utf8でない行はinvalid_data() {
        let mut reader = BufReader::new(&b"GET /\xff\xfe HTTP/1.1\r\n"[..]);
        let mut line = String::new();

        let err = read_head_line(&mut reader, &mut line).await.unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
