//! The data model describing one distribution.
//!
//! A [`DistributionSpec`] is the single source of truth from which the
//! documentation page ([`docs`](crate::docs)), the manifests
//! ([`config`](crate::config)) and the validation report
//! ([`validate`](crate::validate)) are all derived.  Nothing here performs
//! I/O; specs are plain data assembled by [`templates`](crate::templates)
//! or by the caller.

use ensemble_core::api::Api;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::launch::LaunchExample;
use crate::validate::{self, Finding};

/// Namespaced provider identifier, e.g. `remote::sambanova` or
/// `inline::llama-guard`.
///
/// The `remote::` namespace marks providers that proxy an external service;
/// `inline::` providers run inside the stack process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ProviderType(String);

impl ProviderType {
    /// A `remote::{name}` provider.
    pub fn remote(name: &str) -> Self {
        Self(format!("remote::{name}"))
    }

    /// An `inline::{name}` provider.
    pub fn inline(name: &str) -> Self {
        Self(format!("inline::{name}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_remote(&self) -> bool {
        self.0.starts_with("remote::")
    }

    /// The part after the namespace, used as the default instance id:
    /// `remote::sambanova` → `sambanova`.
    pub fn short_name(&self) -> &str {
        self.0
            .split_once("::")
            .map(|(_, name)| name)
            .unwrap_or(&self.0)
    }
}

impl Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which providers back one capability surface.
#[derive(Debug, Clone)]
pub struct ApiBinding {
    pub api: Api,
    pub providers: Vec<ProviderType>,
}

impl ApiBinding {
    pub fn new(api: Api, providers: Vec<ProviderType>) -> Self {
        Self { api, providers }
    }
}

/// One row of the “available by default” model list.
///
/// `model_id` is the public alias; `provider_model_id` is what the backing
/// provider actually serves the checkpoint as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub model_id: String,
    pub provider_model_id: String,
}

impl ModelEntry {
    pub fn new(model_id: impl Into<String>, provider_model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            provider_model_id: provider_model_id.into(),
        }
    }
}

/// One configurable environment variable of the distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarSpec {
    pub name: String,
    pub description: String,
    /// Default value, used verbatim in documentation.  May be empty.
    pub default: String,
}

impl EnvVarSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: default.into(),
        }
    }
}

/// Everything there is to know about one distribution.
#[derive(Debug, Clone)]
pub struct DistributionSpec {
    /// Template name, lowercase (`sambanova`).
    pub name: String,
    /// Human casing for headings (`SambaNova`).
    pub display_name: String,
    /// One-line summary used in manifests and docs.
    pub description: String,
    /// Pre-built container image, if one is published.
    pub container_image: Option<String>,
    /// Provider bindings per capability surface.
    pub bindings: Vec<ApiBinding>,
    /// Configurable environment variables.
    pub env: Vec<EnvVarSpec>,
    /// Models served out of the box.
    pub default_models: Vec<ModelEntry>,
    /// Prose paragraphs rendered under “Prerequisite: API Keys”.
    pub prerequisites: Vec<String>,
    /// Intro sentence of the “Running …” section.
    pub launch_overview: String,
    /// Worked launch examples, in documentation order.
    pub launch: Vec<LaunchExample>,
}

impl DistributionSpec {
    /// The binding for `api`, if the distribution exposes that surface.
    pub fn binding(&self, api: Api) -> Option<&ApiBinding> {
        self.bindings.iter().find(|binding| binding.api == api)
    }

    /// Run all consistency checks.  See [`validate`](crate::validate).
    pub fn validate(&self) -> Vec<Finding> {
        validate::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_type_namespaces() {
        let remote = ProviderType::remote("sambanova");
        assert_eq!(remote.as_str(), "remote::sambanova");
        assert!(remote.is_remote());
        assert_eq!(remote.short_name(), "sambanova");

        let inline = ProviderType::inline("llama-guard");
        assert_eq!(inline.as_str(), "inline::llama-guard");
        assert!(!inline.is_remote());
        assert_eq!(inline.short_name(), "llama-guard");
    }

    #[test]
    fn provider_type_serialises_transparently() {
        let yaml = serde_yaml::to_string(&ProviderType::remote("chromadb")).unwrap();
        assert_eq!(yaml.trim(), "remote::chromadb");
    }
}
