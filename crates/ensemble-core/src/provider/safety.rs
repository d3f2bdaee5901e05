use std::{future::Future, pin::Pin};

use serde_json::Value;

use crate::{chat::Message, error::Result};

/// A **shield** screens a conversation against a safety policy before (or
/// after) it reaches an inference backend.
///
/// Implementations range from a guard model run through a
/// [`ChatCompletionProvider`](crate::provider::ChatCompletionProvider) to a
/// remote moderation endpoint.  Whatever the mechanism, the outcome is the
/// same shape: either the conversation passed, or a [`SafetyViolation`]
/// describing why it did not.
pub trait ShieldProvider: Send + Sync {
    /// Screen the given conversation.
    ///
    /// A failed *screening* is not an `Err`: a violation is a regular,
    /// well-formed outcome carried inside [`RunShieldResponse`].  Errors are
    /// reserved for the shield itself breaking (transport failures,
    /// unparseable verdicts) and must be propagated, never swallowed — a
    /// shield that fails open is worse than no shield at all.
    fn run_shield<'p>(
        &'p self,
        messages: Vec<Message>,
    ) -> Pin<Box<dyn Future<Output = Result<RunShieldResponse>> + Send + 'p>>;
}

/// Outcome of a single shield run.
#[derive(Debug, Clone, Default)]
pub struct RunShieldResponse {
    /// `None` means the conversation passed the policy.
    pub violation: Option<SafetyViolation>,
}

impl RunShieldResponse {
    /// The conversation passed.
    pub fn safe() -> Self {
        Self { violation: None }
    }

    /// The conversation violated the policy.
    pub fn flagged(violation: SafetyViolation) -> Self {
        Self {
            violation: Some(violation),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.violation.is_none()
    }
}

/// A policy violation reported by a shield.
#[derive(Debug, Clone)]
pub struct SafetyViolation {
    /// How severe the violation is.
    pub violation_level: ViolationLevel,
    /// Canned text an application may show to the end user in place of the
    /// blocked content.
    pub user_message: Option<String>,
    /// Shield-specific details, e.g. which policy categories were hit.
    /// Always a JSON object.
    pub metadata: Value,
}

/// Severity attached to a [`SafetyViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationLevel {
    Info,
    Warn,
    Error,
}
