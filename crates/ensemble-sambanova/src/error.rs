use ensemble_core::error::EnsembleError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum SambaNovaError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("SambaNova returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("SambaNova format error: {0}")]
    Format(String),
}

impl From<SambaNovaError> for EnsembleError {
    fn from(value: SambaNovaError) -> Self {
        EnsembleError::Backend(Box::new(value))
    }
}
