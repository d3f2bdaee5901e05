//! # `ensemble` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates of the workspace
//!
//! | Crate                    | What it provides                                                                |
//! |--------------------------|---------------------------------------------------------------------------------|
//! | **`ensemble-core`**      | Provider-agnostic chat types, model registry, [`StackClient`], provider traits  |
//! | **`ensemble-distro`**    | Distribution templates, `run.yaml` / `build.yaml` manifests, doc rendering      |
//! | **`ensemble-guard`**     | Llama Guard policy shield implementing `ShieldProvider`                         |
//! | **`ensemble-sambanova`** | Thin HTTP backend for the SambaNova.AI cloud *(optional)*                       |
//!
//! By default the crate re-exports **core**, **distro** and **guard** plus the
//! SambaNova backend.  Disable default features to stay provider-agnostic and
//! pick backends one by one:
//!
//! ```toml
//! [dependencies]
//! ensemble = { version = "0.3", default-features = false }
//! ```
//!
//! ## Design philosophy
//!
//! * **One spec, many artefacts** – A distribution is described once
//!   (`ensemble::distro::templates`) and everything else (manifests, docs,
//!   model registry) is derived from it, so the pieces cannot drift apart.
//! * **Opt-in providers** – Enabling `sambanova` pulls in `reqwest`, TLS,
//!   etc., otherwise your binary stays lean.
//! * **Shields fail closed** – A guard model that errors or answers gibberish
//!   blocks the request instead of waving it through.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use ensemble::chat::Message;
//! use ensemble::distro::templates;
//! use ensemble::guard::LlamaGuardShield;
//! use ensemble::sambanova::SambaNovaAdapterBuilder;
//! use ensemble::{ModeratedChat, StackClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Backend + alias table, straight from the built-in template.
//!     let template = templates::get("sambanova")?;
//!     let backend = SambaNovaAdapterBuilder::new_from_env().build()?;
//!     let client = StackClient::new(backend, template.run.model_registry()?);
//!
//!     // Llama Guard rides the same backend via a clone of the client.
//!     let shield = LlamaGuardShield::builder(client.clone()).build()?;
//!     let client = client.with_shield(shield);
//!
//!     let outcome = client
//!         .moderated_chat(
//!             "meta-llama/Llama-3.1-8B-Instruct",
//!             vec![Message::user("Why is the sky blue?")],
//!         )
//!         .await?;
//!
//!     match outcome {
//!         ModeratedChat::Answered(reply) => println!("{}", reply.message.content),
//!         ModeratedChat::Refused(violation) => {
//!             println!("{}", violation.user_message.unwrap_or_default());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Crate contents
//!
//! The `pub use` statements below simply forward the public API of the
//! individual crates so users can write `ensemble::StackClient` instead of
//! juggling four separate dependencies.
#![doc(html_root_url = "https://docs.rs/ensemble/latest")]

pub use ensemble_core::*;
pub use ensemble_distro as distro;
pub use ensemble_guard as guard;

#[cfg(feature = "sambanova")]
pub use ensemble_sambanova as sambanova;
