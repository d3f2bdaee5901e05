//! Traits a backend implements to plug into the stack.
//!
//! Each capability surface gets its own small trait so a backend can
//! implement exactly what it supports: an inference-only provider implements
//! [`ChatCompletionProvider`] (and optionally [`StreamingChatProvider`]),
//! a moderation layer implements [`ShieldProvider`], and so on.

mod inference;
mod safety;

pub use inference::{ChatCompletionProvider, ChatParams, StreamingChatProvider};
pub use safety::{RunShieldResponse, SafetyViolation, ShieldProvider, ViolationLevel};
