use async_stream::try_stream;

use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api::{ChatCompletionChunkResponse, ChatCompletionRequest, ChatCompletionResponse},
    error::SambaNovaError,
};

const DEFAULT_BASE_URL: &str = "https://api.sambanova.ai/v1";

/// Minimal HTTP client for SambaNova’s *chat/completions* endpoint.
///
/// * Speaks the OpenAI-compatible dialect (`api` module structs).
/// * Buffered and SSE-streamed completions.
/// * Shares a single `reqwest::Client`, so cloning `SambaNovaClient` is cheap.
#[derive(Clone, Debug)]
pub struct SambaNovaClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl SambaNovaClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 30 s timeout, Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc., or a custom base URL for a self-hosted
    /// OpenAI-compatible endpoint.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Point the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base = base_url.into();
        self
    }

    fn headers(&self) -> Result<HeaderMap, SambaNovaError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|_| {
                SambaNovaError::Format("api key contains invalid header characters".into())
            })?,
        );
        Ok(headers)
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, SambaNovaError> {
        let headers = self.headers()?;
        let url = format!("{}/chat/completions", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(model = %request.model, "sending chat completion request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "chat completion request rejected");
            return Err(SambaNovaError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    /// Perform a **streaming** chat completion.
    pub fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
    ) -> impl Stream<Item = Result<ChatCompletionChunkResponse, SambaNovaError>> + '_ {
        use reqwest::header::ACCEPT;

        // 1) enforce streaming flag
        request.stream = Some(true);

        let url = format!("{}/chat/completions", self.base);

        // 2) async stream wrapper
        try_stream! {
            let mut headers = self.headers()?;
            headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

            #[cfg(feature = "tracing")]
            tracing::debug!(model = %request.model, "opening chat completion stream");

            let resp = self.http.post(url).headers(headers).json(&request).send().await?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(SambaNovaError::Api { status, body })?;
            }

            let mut bytes_stream = resp.bytes_stream();
            let mut buf = Vec::new();

            while let Some(chunk) = bytes_stream.next().await {
                let chunk = chunk?;
                buf.extend_from_slice(&chunk);

                while let Some(pos) = buf.windows(2).position(|w| w == b"\n\n") {
                    let frame: Vec<u8> = buf.drain(..pos + 2).collect();
                    let frame_str = std::str::from_utf8(&frame).map_err(|e| {
                        SambaNovaError::Format(format!("invalid utf-8 in event stream: {e}"))
                    })?;

                    if let Some(data) = frame_str.strip_prefix("data: ") {
                        let data = data.trim();
                        if data == "[DONE]" { return; }

                        let parsed: ChatCompletionChunkResponse = serde_json::from_str(data)?;
                        yield parsed;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatCompletionMessage;
    use crate::api::MessageRole;

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest::new(
            "Meta-Llama-3.1-8B-Instruct".to_owned(),
            vec![ChatCompletionMessage {
                role: MessageRole::User,
                content: "hi".to_owned(),
            }],
        )
    }

    #[tokio::test]
    async fn chat_completion_parses_reply() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "chatcmpl-1",
                    "object": "chat.completion",
                    "created": 1732000000,
                    "model": "Meta-Llama-3.1-8B-Instruct",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "Hello there."},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
                }"#,
            )
            .create_async()
            .await;

        let client =
            SambaNovaClient::with_http("test-key", HttpClient::new(), Some(server.url()));
        let response = client.chat_completion(request()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("Hello there.")
        );
        assert_eq!(response.usage.unwrap().total_tokens, 16);
    }

    #[tokio::test]
    async fn non_success_status_becomes_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error": "invalid api key"}"#)
            .create_async()
            .await;

        let client =
            SambaNovaClient::with_http("bad-key", HttpClient::new(), Some(server.url()));
        let err = client.chat_completion(request()).await.unwrap_err();

        match err {
            SambaNovaError::Api { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert!(body.contains("invalid api key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn streaming_chunks_arrive_in_order() {
        let body = concat!(
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\",\"content\":\"Hel\"},\"finish_reason\":null}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"lo\"},\"finish_reason\":null}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{},\"finish_reason\":\"stop\"}]}\n\n",
            "data: [DONE]\n\n",
        );

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .match_header("accept", "text/event-stream")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(body)
            .create_async()
            .await;

        let client =
            SambaNovaClient::with_http("test-key", HttpClient::new(), Some(server.url()));
        let stream = client.chat_completion_stream(request());
        futures_util::pin_mut!(stream);

        let mut text = String::new();
        let mut finish_seen = false;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.unwrap();
            for choice in chunk.choices {
                if let Some(content) = choice.delta.content {
                    text.push_str(&content);
                }
                if choice.finish_reason.is_some() {
                    finish_seen = true;
                }
            }
        }

        assert_eq!(text, "Hello");
        assert!(finish_seen);
    }
}
