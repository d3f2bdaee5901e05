//! Llama Guard safety shield for the **ensemble** workspace.
//!
//! Runs a Llama Guard 3 checkpoint through any chat-capable backend and
//! exposes it as a [`ShieldProvider`](ensemble_core::provider::ShieldProvider).
//! The backend is a type parameter, so the guard model can run on the same
//! provider as the assistant or on a dedicated one:
//!
//! ```rust
//! use ensemble_core::error::Result;
//! use ensemble_core::provider::ChatCompletionProvider;
//! use ensemble_guard::{HazardCategory, LlamaGuardShield};
//!
//! fn make_shield<B: ChatCompletionProvider>(backend: B) -> Result<LlamaGuardShield<B>> {
//!     LlamaGuardShield::builder(backend)
//!         .without_category(HazardCategory::Defamation)
//!         .build()
//! }
//! # fn main() {}
//! ```
//!
//! The crate carries the thirteen-category hazard taxonomy ([`categories`]),
//! the policy prompt template and the verdict translation.

pub mod categories;
pub mod error;
mod prompt;
mod shield;

pub use categories::HazardCategory;
pub use shield::{LlamaGuardShield, LlamaGuardShieldBuilder, REFUSAL_MESSAGE};
