//! Generic, lightweight client that routes chat requests through a
//! [`ModelRegistry`] to a single concrete backend, with an optional safety
//! shield in front.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that:
//! * The stack's `Message` type converts into what the backend expects.
//! * No dynamic dispatch or object-safety hurdles appear in user code.
//!
//! The shield, by contrast, is held as `Arc<dyn ShieldProvider>`: shields are
//! consulted once per request and never constrain the message type, so
//! dynamic dispatch costs nothing and keeps `StackClient` at a single type
//! parameter.
//!
//! Any backend crate (e.g. `ensemble-sambanova`) just implements the
//! provider traits and the same client works out of the box.
use std::pin::Pin;
use std::sync::Arc;

use crate::{
    chat::{ChatResponse, Message},
    error::{EnsembleError, Result},
    provider::{
        ChatCompletionProvider, ChatParams, RunShieldResponse, SafetyViolation, ShieldProvider,
    },
    registry::ModelRegistry,
};

/// A client bound to a single inference provider.
///
/// Clone the client if you need to share it across tasks; the backend and
/// shield are reference-counted, the registry is copied.
pub struct StackClient<B> {
    backend: Arc<B>,
    registry: ModelRegistry,
    shield: Option<Arc<dyn ShieldProvider>>,
}

impl<B> Clone for StackClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            registry: self.registry.clone(),
            shield: self.shield.clone(),
        }
    }
}

impl<B> StackClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that resolves aliases via `registry` and delegates
    /// all inference calls to `backend`.
    pub fn new(backend: B, registry: ModelRegistry) -> Self {
        Self {
            backend: Arc::new(backend),
            registry,
            shield: None,
        }
    }

    /// Attach a safety shield.  Once set, [`StackClient::moderated_chat`]
    /// screens every conversation before it reaches the backend.
    pub fn with_shield(mut self, shield: impl ShieldProvider + 'static) -> Self {
        self.shield = Some(Arc::new(shield));
        self
    }

    /// Access the underlying backend (e.g. to tweak provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Resolve `alias` and package `messages` into backend-ready parameters.
    ///
    /// Exposed so callers can tweak sampling options before dispatching the
    /// request themselves.
    pub fn resolve_params(&self, alias: &str, messages: Vec<Message>) -> Result<ChatParams<Message>> {
        let model = self
            .registry
            .resolve(alias)
            .cloned()
            .ok_or_else(|| EnsembleError::UnknownModel {
                alias: alias.to_owned(),
            })?;
        Ok(ChatParams::new(messages, model))
    }

    /// One buffered chat round-trip against the model registered as `alias`.
    pub async fn chat(&self, alias: &str, messages: Vec<Message>) -> Result<ChatResponse>
    where
        Message: Into<B::Message>,
    {
        let params = self.resolve_params(alias, messages)?;
        self.backend.chat_complete(params).await
    }

    /// Screen the conversation with the configured shield, then chat.
    ///
    /// On a violation the backend is never contacted and the violation is
    /// returned as [`ModeratedChat::Refused`].  Shield failures propagate as
    /// errors; a broken shield never silently lets a conversation through.
    pub async fn moderated_chat(&self, alias: &str, messages: Vec<Message>) -> Result<ModeratedChat>
    where
        Message: Into<B::Message>,
    {
        let screening = self.run_shield(messages.clone()).await?;
        if let Some(violation) = screening.violation {
            return Ok(ModeratedChat::Refused(violation));
        }
        Ok(ModeratedChat::Answered(self.chat(alias, messages).await?))
    }

    /// Run the configured shield on its own, without any inference call.
    pub async fn run_shield(&self, messages: Vec<Message>) -> Result<RunShieldResponse> {
        let shield = self
            .shield
            .as_ref()
            .ok_or(EnsembleError::ShieldNotConfigured)?;
        shield.run_shield(messages).await
    }
}

/// Result of [`StackClient::moderated_chat`].
#[derive(Debug)]
pub enum ModeratedChat {
    /// The conversation passed the shield and the backend answered.
    Answered(ChatResponse),
    /// The shield flagged the conversation; the backend was not contacted.
    Refused(SafetyViolation),
}

impl<B: ChatCompletionProvider> ChatCompletionProvider for StackClient<B> {
    type Message = B::Message;

    fn chat_complete<'p, M>(
        &self,
        params: ChatParams<M>,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<ChatResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        self.backend.chat_complete(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Role, StopReason};
    use crate::model::{LlamaModel, Model};
    use crate::provider::ViolationLevel;
    use std::future::Future;

    struct EchoBackend;

    impl ChatCompletionProvider for EchoBackend {
        type Message = Message;

        fn chat_complete<'p, M>(
            &self,
            params: ChatParams<M>,
        ) -> Pin<Box<dyn Future<Output = Result<ChatResponse>> + Send + 'p>>
        where
            M: Into<Message> + Clone + Send + Sync + 'p,
        {
            Box::pin(async move {
                let mut messages: Vec<Message> =
                    params.messages.into_iter().map(Into::into).collect();
                let last = messages.pop().ok_or_else(|| {
                    EnsembleError::InvalidRequest("empty conversation".to_owned())
                })?;
                Ok(ChatResponse {
                    message: Message::assistant(format!("{}: {}", params.model, last.content)),
                    stop_reason: Some(StopReason::EndOfTurn),
                    usage: None,
                })
            })
        }
    }

    struct BlockEverything;

    impl ShieldProvider for BlockEverything {
        fn run_shield<'p>(
            &'p self,
            _messages: Vec<Message>,
        ) -> Pin<Box<dyn Future<Output = Result<RunShieldResponse>> + Send + 'p>> {
            Box::pin(async {
                Ok(RunShieldResponse::flagged(SafetyViolation {
                    violation_level: ViolationLevel::Error,
                    user_message: Some("blocked".to_owned()),
                    metadata: serde_json::json!({}),
                }))
            })
        }
    }

    fn registry() -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        registry
            .register("meta-llama/Llama-3.1-8B-Instruct", LlamaModel::Llama3_1_8BInstruct.into())
            .unwrap();
        registry
    }

    #[tokio::test]
    async fn chat_routes_through_registry() {
        let client = StackClient::new(EchoBackend, registry());

        let response = client
            .chat("meta-llama/Llama-3.1-8B-Instruct", vec![Message::user("hi")])
            .await
            .unwrap();

        assert_eq!(response.message.role, Role::Assistant);
        assert_eq!(response.message.content, "meta-llama/Llama-3.1-8B-Instruct: hi");
    }

    #[tokio::test]
    async fn unknown_alias_is_an_error() {
        let client = StackClient::new(EchoBackend, registry());

        let err = client
            .chat("meta-llama/never-registered", vec![Message::user("hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, EnsembleError::UnknownModel { alias } if alias == "meta-llama/never-registered"));
    }

    #[tokio::test]
    async fn moderated_chat_short_circuits_on_violation() {
        let client = StackClient::new(EchoBackend, registry()).with_shield(BlockEverything);

        let outcome = client
            .moderated_chat("meta-llama/Llama-3.1-8B-Instruct", vec![Message::user("hi")])
            .await
            .unwrap();

        match outcome {
            ModeratedChat::Refused(violation) => {
                assert_eq!(violation.violation_level, ViolationLevel::Error);
                assert_eq!(violation.user_message.as_deref(), Some("blocked"));
            }
            ModeratedChat::Answered(_) => panic!("shield should have refused"),
        }
    }

    #[tokio::test]
    async fn run_shield_without_shield_is_an_error() {
        let client = StackClient::new(EchoBackend, registry());

        let err = client.run_shield(vec![Message::user("hi")]).await.unwrap_err();
        assert!(matches!(err, EnsembleError::ShieldNotConfigured));
    }

    #[test]
    fn resolve_params_carries_model() {
        let client = StackClient::new(EchoBackend, registry());

        let params = client
            .resolve_params("meta-llama/Llama-3.1-8B-Instruct", vec![Message::user("hi")])
            .unwrap();

        assert_eq!(params.model(), Model::Llama(LlamaModel::Llama3_1_8BInstruct));
        assert_eq!(params.messages().len(), 1);
    }
}
