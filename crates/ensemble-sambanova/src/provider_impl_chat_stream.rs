use std::pin::Pin;

use crate::SambaNovaAdapter;
use crate::api::ChatCompletionRequest;
use ensemble_core::error::{EnsembleError, Result};
use ensemble_core::provider::{ChatParams, StreamingChatProvider};
use futures_core::stream::Stream;

impl StreamingChatProvider for SambaNovaAdapter {
    type Delta<'s>
        = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
    where
        Self: 's;

    fn chat_complete_stream<'p, M>(&self, params: ChatParams<M>) -> Self::Delta<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = self.client.clone();

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            let request: ChatCompletionRequest = params.try_into()?;

            let stream = client.chat_completion_stream(request);
            futures_util::pin_mut!(stream);

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(EnsembleError::from)?;
                for choice in chunk.choices {
                    if let Some(text) = choice.delta.content
                        && !text.is_empty() {
                            yield text;
                        }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SambaNovaAdapterBuilder;
    use ensemble_core::chat::Message;
    use ensemble_core::model::{LlamaModel, Model};
    use futures_util::StreamExt;

    #[tokio::test]
    async fn deltas_concatenate_to_full_reply() {
        let body = concat!(
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\",\"content\":\"Lla\"},\"finish_reason\":null}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"mas!\"},\"finish_reason\":null}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{},\"finish_reason\":\"stop\"}]}\n\n",
            "data: [DONE]\n\n",
        );

        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_body(body)
            .create_async()
            .await;

        let adapter = SambaNovaAdapterBuilder::new()
            .with_api_key("test-key")
            .with_base_url(server.url())
            .build()
            .unwrap();

        let params = ChatParams::new(
            vec![Message::user("say llamas")],
            Model::Llama(LlamaModel::Llama3_2_3BInstruct),
        );

        let mut stream = adapter.chat_complete_stream(params);
        let mut text = String::new();
        while let Some(delta) = stream.next().await {
            text.push_str(&delta.unwrap());
        }

        assert_eq!(text, "Llamas!");
    }
}
