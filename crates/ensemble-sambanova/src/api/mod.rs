//! Wire-level request / response structs for SambaNova's OpenAI-compatible
//! `v1/chat/completions` endpoint.

mod chat_completion;
mod chat_completion_stream;
mod common;

pub use chat_completion::*;
pub use chat_completion_stream::*;
pub use common::Usage;
