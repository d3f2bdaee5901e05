use std::{future::Future, pin::Pin};

use crate::{
    chat::ChatResponse,
    error::Result,
    model::Model,
};
use futures_core::stream::Stream;

/// A **backend** turns a chat request into a network call to a concrete
/// provider (SambaNova, Ollama, vLLM, …) and parses the structured chat
/// response.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the chat request and normalise the provider’s reply into a
    /// [`ChatResponse`].
    fn chat_complete<'p, M>(
        &self,
        params: ChatParams<M>,
    ) -> Pin<Box<dyn Future<Output = Result<ChatResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// A provider that can deliver the model’s answer **incrementally**.
///
/// The stream yields UTF-8 text *deltas* (similar to OpenAI’s SSE format).
/// Richer payload support can be layered on later by introducing a dedicated
/// enum – starting with plain text keeps the API minimal and
/// backend-agnostic.
pub trait StreamingChatProvider: ChatCompletionProvider {
    /// The item type returned on the stream.  For now it is plain UTF-8 text
    /// chunks, but back-ends are free to wrap it in richer enums if needed.
    type Delta<'s>: Stream<Item = Result<String>> + Send + 's
    where
        Self: 's;

    /// Start a streaming chat completion.
    fn chat_complete_stream<'p, M>(&self, params: ChatParams<M>) -> Self::Delta<'p>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// Everything a backend needs to know for one chat round-trip.
///
/// Sampling knobs are optional; a backend omits whatever the caller leaves
/// unset instead of inventing defaults of its own.
#[derive(Debug, Clone)]
pub struct ChatParams<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
    pub response_format: Option<serde_json::Value>,
}

impl<M: Clone> ChatParams<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            top_p: None,
            max_tokens: None,
            response_format: None,
        }
    }

    pub fn messages(&self) -> &Vec<M> {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_response_format(mut self, response_format: serde_json::Value) -> Self {
        self.response_format = Some(response_format);
        self
    }
}
