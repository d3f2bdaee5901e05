//! Distribution templates, manifests and documentation for **ensemble**.
//!
//! A *distribution* is one pre-assembled stack: a set of providers bound to
//! capability surfaces, the models it serves, the environment variables it
//! reads and the commands that launch it.  This crate keeps all of that in
//! one typed description and derives every shipped artefact from it:
//!
//! | Module        | Purpose                                                |
//! |---------------|--------------------------------------------------------|
//! | [`spec`]      | The [`DistributionSpec`](spec::DistributionSpec) data model |
//! | [`templates`] | Built-in distributions (`sambanova`)                   |
//! | [`config`]    | Typed `run.yaml` / `build.yaml` manifests              |
//! | [`env`]       | `${env.VAR:default}` reference resolution              |
//! | [`launch`]    | Renderable docker / conda launch commands              |
//! | [`docs`]      | Markdown documentation pages built from a spec         |
//! | [`markdown`]  | The low-level page builder                             |
//! | [`validate`]  | Consistency checks over a spec                         |
//! | [`schema`]    | JSON Schemas for the manifest types                    |
//!
//! Generating docs and manifests from the same spec means they cannot
//! contradict each other; where the published material itself is internally
//! inconsistent, [`validate`] reports it instead of hiding it.
//!
//! ```
//! use ensemble_distro::{docs, templates};
//!
//! let template = templates::get("sambanova")?;
//! let page = docs::render_distribution_page(&template.spec);
//! assert!(page.starts_with("---\norphan: true\n---"));
//!
//! let run_yaml = template.run.to_yaml()?;
//! assert!(run_yaml.contains("remote::sambanova"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod docs;
pub mod env;
pub mod error;
pub mod launch;
pub mod markdown;
pub mod schema;
pub mod spec;
pub mod templates;
pub mod validate;

pub use error::DistroError;
