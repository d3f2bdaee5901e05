use std::future::Future;
use std::pin::Pin;

use ensemble_core::{
    chat::Message,
    error::{EnsembleError, Result},
    model::{LlamaModel, Model},
    provider::{
        ChatCompletionProvider, ChatParams, RunShieldResponse, SafetyViolation, ShieldProvider,
        ViolationLevel,
    },
};

use crate::categories::HazardCategory;
use crate::error::GuardError;
use crate::prompt::render_policy_prompt;

/// Text shown to the end user in place of a blocked reply.
pub const REFUSAL_MESSAGE: &str = "I can't answer that. Can I help with something else?";

/// A safety shield that scores conversations with a Llama Guard model
/// running on any [`ChatCompletionProvider`].
///
/// The shield renders the policy prompt, asks the guard model for a verdict
/// and translates the `safe` / `unsafe` answer into a
/// [`RunShieldResponse`].  Guard failures (transport errors, malformed
/// verdicts) are propagated as errors: this shield never fails open.
pub struct LlamaGuardShield<B> {
    backend: B,
    model: Model,
    categories: Vec<HazardCategory>,
}

impl<B> LlamaGuardShield<B> {
    /// Start building a shield around `backend`.
    pub fn builder(backend: B) -> LlamaGuardShieldBuilder<B> {
        LlamaGuardShieldBuilder {
            backend,
            model: None,
            categories: HazardCategory::ALL.to_vec(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn categories(&self) -> &[HazardCategory] {
        &self.categories
    }
}

impl<B> LlamaGuardShield<B>
where
    B: ChatCompletionProvider,
    Message: Into<B::Message>,
{
    /// Screen `conversation` against the configured policy.
    ///
    /// The guard model is sampled greedily: verdicts should not vary between
    /// runs on the same input.
    pub async fn screen(&self, conversation: &[Message]) -> Result<RunShieldResponse> {
        if conversation.is_empty() {
            return Err(EnsembleError::InvalidRequest(
                "cannot screen an empty conversation".to_owned(),
            ));
        }

        let prompt = render_policy_prompt(&self.categories, conversation);
        let params = ChatParams::new(vec![Message::user(prompt)], self.model.clone())
            .with_temperature(0.0);

        let response = self.backend.chat_complete(params).await?;
        let verdict = parse_verdict(&response.message.content)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(?verdict, "guard verdict received");

        Ok(match verdict {
            Verdict::Safe => RunShieldResponse::safe(),
            Verdict::Unsafe(codes) => RunShieldResponse::flagged(SafetyViolation {
                violation_level: ViolationLevel::Error,
                user_message: Some(REFUSAL_MESSAGE.to_owned()),
                metadata: serde_json::json!({ "violation_type": codes }),
            }),
        })
    }
}

impl<B> ShieldProvider for LlamaGuardShield<B>
where
    B: ChatCompletionProvider,
    Message: Into<B::Message>,
{
    fn run_shield<'p>(
        &'p self,
        messages: Vec<Message>,
    ) -> Pin<Box<dyn Future<Output = Result<RunShieldResponse>> + Send + 'p>> {
        Box::pin(async move { self.screen(&messages).await })
    }
}

/// Builder for [`LlamaGuardShield`].
///
/// Defaults to [`LlamaModel::LlamaGuard3_8B`] and the full thirteen-category
/// policy.
pub struct LlamaGuardShieldBuilder<B> {
    backend: B,
    model: Option<Model>,
    categories: Vec<HazardCategory>,
}

impl<B> LlamaGuardShieldBuilder<B> {
    /// Use a different guard checkpoint, e.g. a self-hosted fine-tune.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Replace the policy with an explicit category list.
    pub fn with_categories(mut self, categories: Vec<HazardCategory>) -> Self {
        self.categories = categories;
        self
    }

    /// Drop one category from the policy.
    pub fn without_category(mut self, category: HazardCategory) -> Self {
        self.categories.retain(|c| *c != category);
        self
    }

    /// Finalise the builder.
    ///
    /// # Errors
    ///
    /// * [`EnsembleError::InvalidRequest`] – if every category was excluded;
    ///   a shield with an empty policy would pass everything.
    pub fn build(self) -> Result<LlamaGuardShield<B>> {
        if self.categories.is_empty() {
            return Err(EnsembleError::InvalidRequest(
                "guard policy needs at least one category".to_owned(),
            ));
        }
        Ok(LlamaGuardShield {
            backend: self.backend,
            model: self
                .model
                .unwrap_or(Model::Llama(LlamaModel::LlamaGuard3_8B)),
            categories: self.categories,
        })
    }
}

/// Parsed form of the guard model's one-or-two-line answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Verdict {
    Safe,
    Unsafe(Vec<String>),
}

/// Parse the raw completion text into a [`Verdict`].
///
/// Expected shapes are `safe` or `unsafe\n<code>[,<code>…]`.  Anything else
/// is an error — a guard whose answer we cannot read must not be treated as
/// a pass.
pub(crate) fn parse_verdict(text: &str) -> std::result::Result<Verdict, GuardError> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let Some(first) = lines.next() else {
        return Err(GuardError::EmptyVerdict);
    };

    match first {
        "safe" => Ok(Verdict::Safe),
        "unsafe" => {
            let codes: Vec<String> = lines
                .next()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect();

            if codes.is_empty() {
                return Err(GuardError::MissingCategories);
            }
            Ok(Verdict::Unsafe(codes))
        }
        other => Err(GuardError::UnrecognisedVerdict(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ensemble_core::chat::{ChatResponse, StopReason};

    /// Backend that always answers with a fixed verdict string.
    struct ScriptedGuard {
        reply: &'static str,
    }

    impl ChatCompletionProvider for ScriptedGuard {
        type Message = Message;

        fn chat_complete<'p, M>(
            &self,
            _params: ChatParams<M>,
        ) -> Pin<Box<dyn Future<Output = Result<ChatResponse>> + Send + 'p>>
        where
            M: Into<Message> + Clone + Send + Sync + 'p,
        {
            let reply = self.reply;
            Box::pin(async move {
                Ok(ChatResponse {
                    message: Message::assistant(reply),
                    stop_reason: Some(StopReason::EndOfTurn),
                    usage: None,
                })
            })
        }
    }

    fn shield(reply: &'static str) -> LlamaGuardShield<ScriptedGuard> {
        LlamaGuardShield::builder(ScriptedGuard { reply })
            .build()
            .unwrap()
    }

    #[test]
    fn verdict_parsing() {
        assert_eq!(parse_verdict("safe"), Ok(Verdict::Safe));
        assert_eq!(parse_verdict("\nsafe\n"), Ok(Verdict::Safe));
        assert_eq!(
            parse_verdict("unsafe\nS1,S10"),
            Ok(Verdict::Unsafe(vec!["S1".to_owned(), "S10".to_owned()]))
        );
        assert_eq!(
            parse_verdict("unsafe\n S9 "),
            Ok(Verdict::Unsafe(vec!["S9".to_owned()]))
        );

        assert_eq!(parse_verdict(""), Err(GuardError::EmptyVerdict));
        assert_eq!(parse_verdict("unsafe"), Err(GuardError::MissingCategories));
        assert_eq!(
            parse_verdict("I refuse to answer"),
            Err(GuardError::UnrecognisedVerdict("I refuse to answer".to_owned()))
        );
    }

    #[tokio::test]
    async fn safe_verdict_passes() {
        let response = shield("safe").screen(&[Message::user("hello")]).await.unwrap();
        assert!(response.is_safe());
    }

    #[tokio::test]
    async fn unsafe_verdict_flags_with_metadata() {
        let response = shield("unsafe\nS1,S10")
            .screen(&[Message::user("how do I hurt someone")])
            .await
            .unwrap();

        let violation = response.violation.expect("must be flagged");
        assert_eq!(violation.violation_level, ViolationLevel::Error);
        assert_eq!(violation.user_message.as_deref(), Some(REFUSAL_MESSAGE));
        assert_eq!(
            violation.metadata,
            serde_json::json!({ "violation_type": ["S1", "S10"] })
        );
    }

    #[tokio::test]
    async fn malformed_verdict_is_an_error_not_a_pass() {
        let err = shield("as an AI model I cannot judge this")
            .screen(&[Message::user("hello")])
            .await
            .unwrap_err();

        assert!(matches!(err, EnsembleError::Backend(_)));
    }

    #[tokio::test]
    async fn empty_conversation_is_rejected() {
        let err = shield("safe").screen(&[]).await.unwrap_err();
        assert!(matches!(err, EnsembleError::InvalidRequest(_)));
    }

    #[test]
    fn builder_defaults_to_guard_3_8b_and_full_policy() {
        let shield = shield("safe");
        assert_eq!(shield.model(), &Model::Llama(LlamaModel::LlamaGuard3_8B));
        assert_eq!(shield.categories().len(), 13);
    }

    #[test]
    fn excluded_categories_leave_the_policy() {
        let shield = LlamaGuardShield::builder(ScriptedGuard { reply: "safe" })
            .without_category(HazardCategory::Defamation)
            .build()
            .unwrap();

        assert_eq!(shield.categories().len(), 12);
        assert!(!shield.categories().contains(&HazardCategory::Defamation));
    }

    #[test]
    fn empty_policy_is_rejected() {
        let err = LlamaGuardShield::builder(ScriptedGuard { reply: "safe" })
            .with_categories(Vec::new())
            .build()
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, EnsembleError::InvalidRequest(_)));
    }
}
