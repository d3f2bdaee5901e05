use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use ensemble_core::{
    chat::{ChatResponse, UsageReport},
    error::Result,
    provider::{ChatCompletionProvider, ChatParams},
};

use crate::{
    SambaNovaAdapter,
    api::{ChatCompletionMessage, ChatCompletionRequest},
    error::SambaNovaError,
};

impl ChatCompletionProvider for SambaNovaAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatParams<M>,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request: ChatCompletionRequest = params.try_into()?;

            let mut response = client.chat_completion(request).await?;

            let usage = response.usage.map(|usage| UsageReport {
                prompt_tokens: usage.prompt_tokens as i64,
                completion_tokens: usage.completion_tokens as i64,
                total_tokens: usage.total_tokens as i64,
            });

            let Some(first_choice) = response.choices.pop() else {
                return Err(SambaNovaError::Format("response has no choices".into()).into());
            };

            Ok(ChatResponse {
                stop_reason: first_choice.finish_reason.map(|reason| reason.stop_reason()),
                message: first_choice.message.into(),
                usage,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SambaNovaAdapterBuilder;
    use ensemble_core::chat::{Message, Role, StopReason};
    use ensemble_core::model::{LlamaModel, Model};

    #[tokio::test]
    async fn adapter_normalises_provider_reply() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": "chatcmpl-2",
                    "object": "chat.completion",
                    "created": 1732000000,
                    "model": "Meta-Llama-3.1-8B-Instruct",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "Four."},
                        "finish_reason": "length"
                    }],
                    "usage": {"prompt_tokens": 9, "completion_tokens": 2, "total_tokens": 11}
                }"#,
            )
            .create_async()
            .await;

        let adapter = SambaNovaAdapterBuilder::new()
            .with_api_key("test-key")
            .with_base_url(server.url())
            .build()
            .unwrap();

        let params = ChatParams::new(
            vec![Message::user("2 + 2?")],
            Model::Llama(LlamaModel::Llama3_1_8BInstruct),
        );
        let response = adapter.chat_complete(params).await.unwrap();

        assert_eq!(response.message.role, Role::Assistant);
        assert_eq!(response.message.content, "Four.");
        assert_eq!(response.stop_reason, Some(StopReason::OutOfTokens));
        assert_eq!(response.usage.unwrap().total_tokens, 11);
    }

    #[tokio::test]
    async fn empty_choices_is_a_format_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": null, "created": 0, "model": "Meta-Llama-3.1-8B-Instruct", "choices": []}"#,
            )
            .create_async()
            .await;

        let adapter = SambaNovaAdapterBuilder::new()
            .with_api_key("test-key")
            .with_base_url(server.url())
            .build()
            .unwrap();

        let params = ChatParams::new(
            vec![Message::user("hi")],
            Model::Llama(LlamaModel::Llama3_1_8BInstruct),
        );
        let err = adapter.chat_complete(params).await.unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }
}
