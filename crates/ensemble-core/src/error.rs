//! Unified error type exposed by **`ensemble-core`**.
//!
//! Provider crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`StackClient`].  This keeps the
//! public API small while still conveying rich diagnostic information.
//!
//! [`StackClient`]: crate::client::StackClient

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, EnsembleError>;

#[derive(Debug, Error)]
pub enum EnsembleError {
    /// A chat request named a public alias that was never registered with the
    /// stack's [`ModelRegistry`](crate::registry::ModelRegistry).
    #[error("model `{alias}` is not registered with this stack")]
    UnknownModel { alias: String },

    /// The same public alias was registered twice.  Each alias must resolve
    /// to exactly one model.
    #[error("model `{alias}` is registered twice")]
    DuplicateModel { alias: String },

    /// The selected backend is present but does not recognise or support the
    /// requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported { provider: &'static str, model: String },

    /// A safety operation was requested on a stack that was built without a
    /// shield.
    #[error("no safety shield is configured for this stack")]
    ShieldNotConfigured,

    /// Failure while serialising or deserialising JSON payloads sent to / received
    /// from the LLM provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit another
    /// category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
