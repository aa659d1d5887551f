use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::borrow::Cow;

use super::language::resolve_language;
use super::prompt::build_system_prompt;
use super::sse_parser::sse_to_text_stream;
use super::{TranslateError, Translator};

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Translator backed by an OpenAI-compatible chat completions endpoint.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl TranslationClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    /// Identifies the provider in translation cache keys.
    pub fn cache_namespace(&self) -> String {
        format!("{}#{}", self.endpoint.trim_end_matches('/'), self.model)
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let language_name = resolve_language(target_language)
            .ok_or_else(|| TranslateError::UnsupportedLanguage(target_language.to_string()))?;

        let url = self.completions_url();
        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(build_system_prompt(language_name)),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await.map_err(|e| classify_send_error(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut translated = String::new();
        while let Some(chunk) = stream.next().await {
            translated.push_str(&chunk?);
        }

        let translated = translated.trim();
        if translated.is_empty() {
            return Err(TranslateError::EmptyResponse);
        }

        Ok(translated.to_string())
    }
}

fn classify_send_error(url: &str, err: &reqwest::Error) -> TranslateError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        TranslateError::Transient(format!("failed to reach {url}: {err}"))
    } else {
        TranslateError::Rejected(format!("request to {url} failed: {err}"))
    }
}

/// Overload and server faults are retryable; any other refusal is final.
fn classify_status(status: StatusCode, body: &str) -> TranslateError {
    let message = format!("API request failed with status {status}: {body}");
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        TranslateError::Transient(message)
    } else {
        TranslateError::Rejected(message)
    }
}
