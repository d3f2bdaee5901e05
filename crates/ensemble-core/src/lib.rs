//! Provider-agnostic core of the **ensemble** workspace.
//!
//! Everything a distribution needs to talk about without naming a concrete
//! vendor lives here:
//!
//! | Module                 | Purpose                                            |
//! |------------------------|----------------------------------------------------|
//! | [`api`]                | The closed set of capability surfaces              |
//! | [`chat`]               | Generic message / response types                   |
//! | [`model`]              | Typed model identifiers and descriptors            |
//! | [`registry`]           | Public alias → model resolution                    |
//! | [`provider`]           | Traits a backend implements                        |
//! | [`client`]             | [`StackClient`] tying registry, backend and shield |
//! | [`error`]              | Workspace-wide error enum                          |
//!
//! Backend crates (`ensemble-sambanova`, …) depend on this crate and are
//! depended on by nothing else in the workspace, which keeps the dependency
//! graph a star: swap a backend without touching the rest.

pub mod api;
pub mod chat;
pub mod client;
pub mod error;
pub mod model;
pub mod provider;
pub mod registry;

pub use client::{ModeratedChat, StackClient};
