use serde::Deserialize;

use super::chat_completion::{FinishReason, MessageRole};

/// A delta message as returned by SambaNova when `stream = true`.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessageDelta {
    pub role: Option<MessageRole>,
    pub content: Option<String>,
}

/// A single streaming choice payload.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkChoice {
    pub index: i64,
    pub delta: ChatCompletionMessageDelta,
    pub finish_reason: Option<FinishReason>,
}

/// The outermost object sent by SambaNova for each SSE chunk.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: Option<i64>,
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChunkChoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_parses_with_sparse_fields() {
        let raw = r#"{
            "id": "c1",
            "choices": [{
                "index": 0,
                "delta": {"content": "Hel"},
                "finish_reason": null
            }]
        }"#;

        let chunk: ChatCompletionChunkResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hel"));
        assert!(chunk.choices[0].finish_reason.is_none());
    }
}
