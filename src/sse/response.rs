#[derive(Debug, PartialEq, Clone)]
pub enum SseResponse {
    Event(String),
    Data(String),
    /// A line with an unknown or missing field name, kept verbatim.
    Other(String),
}

impl SseResponse {
    pub fn from_line(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.starts_with("data:") {
            return Self::Data(Self::trim(line, "data:"));
        }
        if line.starts_with("event:") {
            return Self::Event(Self::trim(line, "event:"));
        }
        Self::Other(line.to_string())
    }
    /// Splits a frame into its lines, dropping the terminating blank line.
    pub fn from_frame(frame: &str) -> Vec<Self> {
        frame
            .lines()
            .filter(|line| !line.is_empty())
            .map(Self::from_line)
            .collect()
    }
    fn trim(line: &str, res_type: &str) -> String {
        let value = &line[res_type.len()..];
        value.strip_prefix(' ').unwrap_or(value).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn 各ペイロードの先頭行はdataになる() {
        for (line, value) in [("data: foo\n", "foo"), ("data: bar\r\n", "bar"), ("data:baz", "baz")] {
            assert_eq!(SseResponse::from_line(line), SseResponse::Data(value.to_string()));
        }
    }
    #[test]
    fn eventと未知のフィールドを区別する() {
        let sut = SseResponse::from_frame("event: tick\r\nretry: 1000\r\ndata: foo\r\n\r\n");

        assert_eq!(
            sut,
            vec![
                SseResponse::Event("tick".to_string()),
                SseResponse::Other("retry: 1000".to_string()),
                SseResponse::Data("foo".to_string()),
            ]
        );
    }
    #[test]
    fn dataの値に含まれるdataは残す() {
        let sut = SseResponse::from_line("data:data: x");

        assert_eq!(SseResponse::Data("data: x".to_string()), sut);
    }
    #[test]
    fn フィールド名のない行はそのまま() {
        let sut = SseResponse::from_frame("data: baz\nfrotz\n\n");

        assert_eq!(
            sut,
            vec![
                SseResponse::Data("baz".to_string()),
                SseResponse::Other("frotz".to_string()),
            ]
        );
    }
}
