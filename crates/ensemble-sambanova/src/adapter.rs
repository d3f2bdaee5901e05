use std::{env, sync::Arc};

use ensemble_core::error::{EnsembleError, Result};

use crate::client::SambaNovaClient;

/// Environment variable holding the SambaNova.AI API key.
pub const SAMBANOVA_API_KEY_ENV: &str = "SAMBANOVA_API_KEY";

/// Thin wrapper that wires the HTTP client [`SambaNovaClient`] into a value
/// that implements the `ensemble-core` provider traits.
///
/// Think of it as the **service locator** for the SambaNova back-end:
///
/// * stores the API key and optionally a custom base URL,
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`SambaNovaAdapterBuilder`] so callers don’t have to
///   juggle `Option<String>` manually.
///
/// The type itself purposefully exposes **no additional methods**—all user-
/// facing functionality sits on the generic [`ensemble_core::StackClient`]
/// once the adapter is plugged in.
#[derive(Debug)]
pub struct SambaNovaAdapter {
    pub(crate) client: Arc<SambaNovaClient>,
}

/// Builder for [`SambaNovaAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use ensemble_sambanova::SambaNovaAdapterBuilder;
///
/// let backend = SambaNovaAdapterBuilder::new_from_env()
///     .build()
///     .expect("SAMBANOVA_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, organisation ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct SambaNovaAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl SambaNovaAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `SAMBANOVA_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(SAMBANOVA_API_KEY_ENV).ok(),
            base_url: None,
        }
    }

    /// Override the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a different OpenAI-compatible endpoint, e.g. a
    /// self-hosted gateway.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`EnsembleError::InvalidRequest`] – if the API key is missing.
    pub fn build(self) -> Result<SambaNovaAdapter> {
        let api_key = self.api_key.ok_or(EnsembleError::InvalidRequest(format!(
            "missing env variable: `{SAMBANOVA_API_KEY_ENV}`"
        )))?;

        let client = match self.base_url {
            Some(base) => SambaNovaClient::new(api_key).with_base_url(base),
            None => SambaNovaClient::new(api_key),
        };

        Ok(SambaNovaAdapter {
            client: Arc::new(client),
        })
    }
}
