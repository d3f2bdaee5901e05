use ensemble_core::chat::{Message, Role, StopReason};
use ensemble_core::error::EnsembleError;
use ensemble_core::provider::ChatParams;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            top_p: None,
            max_tokens: None,
            response_format: None,
            stream: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    response_format: serde_json::Value,
    stream: bool
);

impl<M> TryFrom<ChatParams<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    type Error = EnsembleError;

    fn try_from(value: ChatParams<M>) -> Result<Self, Self::Error> {
        let model = map_model(&value.model).ok_or(EnsembleError::ModelNotSupported {
            provider: "sambanova",
            model: value.model.to_string(),
        })?;
        Ok(Self {
            model: model.into(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            top_p: value.top_p,
            max_tokens: value.max_tokens,
            response_format: value.response_format,
            stream: None,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl From<Role> for MessageRole {
    fn from(value: Role) -> Self {
        match value {
            Role::System => MessageRole::System,
            Role::User => MessageRole::User,
            Role::Assistant => MessageRole::Assistant,
        }
    }
}

impl From<MessageRole> for Role {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::System => Role::System,
            MessageRole::User => Role::User,
            MessageRole::Assistant => Role::Assistant,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

impl From<Message> for ChatCompletionMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    pub content: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for Message {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        Message {
            role: value.role.into(),
            content: value.content.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

impl FinishReason {
    pub fn stop_reason(self) -> StopReason {
        match self {
            FinishReason::Stop => StopReason::EndOfTurn,
            FinishReason::Length => StopReason::OutOfTokens,
            FinishReason::ContentFilter => StopReason::ContentFilter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ensemble_core::model::{LlamaModel, Model};

    #[test]
    fn request_omits_unset_options() {
        let request = ChatCompletionRequest::new(
            "Meta-Llama-3.1-8B-Instruct".to_owned(),
            vec![Message::user("hi").into()],
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "Meta-Llama-3.1-8B-Instruct");
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("temperature").is_none());
        assert!(json.get("stream").is_none());
    }

    #[test]
    fn params_convert_to_request() {
        let params = ChatParams::new(
            vec![Message::system("be brief"), Message::user("hi")],
            Model::Llama(LlamaModel::Llama3_1_70BInstruct),
        )
        .with_temperature(0.2)
        .with_max_tokens(64);

        let request = ChatCompletionRequest::try_from(params).unwrap();
        assert_eq!(request.model, "Meta-Llama-3.1-70B-Instruct");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(64));
        assert_eq!(request.top_p, None);
    }

    #[test]
    fn response_parses_without_usage() {
        let raw = r#"{
            "id": "d6e2c8f0",
            "created": 1732000000,
            "model": "Meta-Llama-3.1-8B-Instruct",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello!"},
                "finish_reason": "stop"
            }]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(response.usage.is_none());
        assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Stop));
        let message: Message = response.choices[0].message.clone().into();
        assert_eq!(message.content, "Hello!");
        assert_eq!(message.role, Role::Assistant);
    }
}
