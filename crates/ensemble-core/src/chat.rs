//! Generic chat message and response types used by the *ensemble-core* crate.
//!
//! They deliberately mirror the concepts exposed by most provider APIs:
//! “system”, “user” and “assistant” turns with plain-text content.  By
//! staying minimal and provider-agnostic we can:
//!
//! * convert them into provider-specific structs via a simple `From`/`Into`,
//! * serialize them without pulling in heavyweight dependencies, and
//! * use them in unit tests without mocking a full transport layer.
//!
//! ## When to add more fields?
//!
//! Only if the additional data is **required by multiple back-ends** or
//! **fundamentally provider-independent**.  Otherwise extend the
//! provider-specific message type instead of bloating this one.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `role` – see [`Role`] for permitted values.
/// * `content` – the raw UTF-8 content.  Markdown is fine, but keep newlines
///   and indentation portable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use ensemble_core::chat::{Message, Role};
    ///
    /// let sys = Message::new(Role::System, "You are a helpful bot.");
    /// ```
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name so you
/// can feed it directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages originating from the human user.
    User,
    /// Messages produced by the assistant / model.
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A completed (non-streamed) chat turn as returned by a backend.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant message produced by the model.
    pub message: Message,
    /// Why the model stopped emitting tokens, when the backend reports it.
    pub stop_reason: Option<StopReason>,
    /// Token accounting, when the backend reports it.
    pub usage: Option<UsageReport>,
}

/// Provider-independent reason why generation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The model finished its turn naturally.
    EndOfTurn,
    /// Generation hit the token ceiling before the turn finished.
    OutOfTokens,
    /// The provider's own moderation layer cut the response short.
    ContentFilter,
}

/// Token counts for a single request / response pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
