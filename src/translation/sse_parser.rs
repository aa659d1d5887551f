//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::TranslateError;

#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// A broken body stream is reported as a transient error and ends the stream;
/// a half-received translation is never useful.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, TranslateError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(TranslateError::Transient(format!("response stream broke: {e}")));
                    return;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();
                let line = line.trim();

                if line == "data: [DONE]" {
                    return;
                }
                if let Some(content) = parse_sse_line(line) {
                    yield Ok(content);
                }
            }
        }

        // Some servers omit the trailing newline on the last event
        if let Some(content) = parse_sse_line(buffer.trim()) {
            yield Ok(content);
        }
    }
}

/// Extracts the text content of one `data:` line, if any.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data: ")?;

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    async fn collect(chunks: Vec<&'static str>) -> Vec<Result<String, TranslateError>> {
        let byte_stream = futures_util::stream::iter(
            chunks
                .into_iter()
                .map(|c| Ok::<_, reqwest::Error>(Bytes::from_static(c.as_bytes()))),
        );
        sse_to_text_stream(byte_stream).collect().await
    }

    #[test]
    fn test_parse_sse_line_with_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"Hola"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Hola".to_string()));
    }

    #[test]
    fn test_parse_sse_line_with_null_content() {
        let line = r#"data: {"choices":[{"delta":{}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_multiple_choices() {
        let line =
            r#"data: {"choices":[{"delta":{"content":"Hola"}},{"delta":{"content":" mundo"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Hola mundo".to_string()));
    }

    #[test]
    fn test_parse_sse_line_ignores_non_data() {
        assert_eq!(parse_sse_line(": keep-alive"), None);
        assert_eq!(parse_sse_line("data: [DONE]"), None);
        assert_eq!(parse_sse_line("data: not json"), None);
        assert_eq!(parse_sse_line(""), None);
    }

    #[tokio::test]
    async fn test_stream_joins_split_lines() {
        let items = collect(vec![
            "data: {\"choices\":[{\"delta\":{\"con",
            "tent\":\"Hola\"}}]}\n\ndata: {\"choices\":[{\"delta\":{\"content\":\" amigo\"}}]}\n",
            "data: [DONE]\n",
        ])
        .await;

        let text: Vec<String> = items.into_iter().map(Result::unwrap).collect();
        assert_eq!(text, vec!["Hola".to_string(), " amigo".to_string()]);
    }

    #[tokio::test]
    async fn test_stream_stops_at_done() {
        let items = collect(vec![
            "data: [DONE]\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"late\"}}]}\n",
        ])
        .await;

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_stream_reads_unterminated_last_event() {
        let items = collect(vec!["data: {\"choices\":[{\"delta\":{\"content\":\"fin\"}}]}"]).await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), "fin");
    }
}
