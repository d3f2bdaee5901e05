//! SambaNova.AI backend for the **ensemble** workspace.
//!
//! Wraps SambaNova's OpenAI-compatible cloud endpoint
//! (`https://api.sambanova.ai/v1`) behind the `ensemble-core` provider
//! traits.  Build a [`SambaNovaAdapter`], hand it to a
//! [`StackClient`](ensemble_core::StackClient), and every registered Llama
//! model becomes one `chat` call away — buffered or streamed.

mod adapter;
pub mod model_map;
mod provider_impl_chat;
mod provider_impl_chat_stream;

pub use adapter::{SAMBANOVA_API_KEY_ENV, SambaNovaAdapter, SambaNovaAdapterBuilder};
pub mod api;
mod client;
pub mod error;
