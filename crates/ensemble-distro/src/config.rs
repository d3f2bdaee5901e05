//! Typed `run.yaml` / `build.yaml` manifests.
//!
//! Both manifests serialise through `serde_yaml` and deserialise back, so a
//! template's generated output and a hand-edited file on disk go through the
//! same types.  Provider-specific settings stay schemaless
//! (`serde_json::Value`): each provider validates its own payload, the
//! manifest only carries it.

use std::collections::BTreeMap;

use ensemble_core::api::Api;
use ensemble_core::model::Model;
use ensemble_core::registry::ModelRegistry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::env::resolve_json;
use crate::error::DistroError;
use crate::spec::ProviderType;

/// Manifest format version emitted by this crate.
pub const MANIFEST_VERSION: &str = "2";

/// How a built distribution is packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    Conda,
    Container,
    Venv,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Conda => "conda",
            ImageType::Container => "container",
            ImageType::Venv => "venv",
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One instantiated provider inside a run manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProviderInstance {
    pub provider_id: String,
    pub provider_type: ProviderType,
    /// Provider-specific settings; `{}` when the provider needs none.
    pub config: serde_json::Value,
}

impl ProviderInstance {
    /// Instance with the default id — the provider type's short name.
    pub fn new(provider_type: ProviderType, config: serde_json::Value) -> Self {
        Self {
            provider_id: provider_type.short_name().to_owned(),
            provider_type,
            config,
        }
    }

    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }
}

/// One model advertised by a run manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModelConfig {
    /// Free-form annotations; `{}` when absent.
    pub metadata: serde_json::Value,
    pub model_id: String,
    pub provider_id: String,
    pub provider_model_id: String,
}

/// One shield advertised by a run manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShieldConfig {
    pub shield_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_shield_id: Option<String>,
}

/// The `run.yaml` manifest a stack server boots from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunConfig {
    pub version: String,
    pub image_name: String,
    pub apis: Vec<Api>,
    pub providers: BTreeMap<Api, Vec<ProviderInstance>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<ModelConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shields: Vec<ShieldConfig>,
}

impl RunConfig {
    pub fn to_yaml(&self) -> Result<String, DistroError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, DistroError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse a manifest and resolve its `${env.…}` references in one step.
    pub fn from_yaml_resolved(
        text: &str,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, DistroError> {
        let mut config = Self::from_yaml(text)?;
        config.resolve_env(lookup)?;
        Ok(config)
    }

    /// Resolve `${env.…}` references in every schemaless payload of the
    /// manifest (provider configs and model metadata).
    pub fn resolve_env(
        &mut self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<(), DistroError> {
        for instances in self.providers.values_mut() {
            for instance in instances {
                resolve_json(&mut instance.config, lookup)?;
            }
        }
        for model in &mut self.models {
            resolve_json(&mut model.metadata, lookup)?;
        }
        Ok(())
    }

    /// Build the alias table a [`StackClient`](ensemble_core::StackClient)
    /// needs from the manifest's model list.
    ///
    /// Aliases resolve to [`Model::Custom`] carrying the provider-native
    /// name, mirroring what a running stack does with the same file.
    pub fn model_registry(&self) -> ensemble_core::error::Result<ModelRegistry> {
        ModelRegistry::with_entries(
            self.models
                .iter()
                .map(|model| (model.model_id.clone(), Model::custom(&model.provider_model_id))),
        )
    }
}

/// The `build.yaml` manifest describing how to assemble an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BuildConfig {
    pub name: String,
    pub distribution_spec: BuildDistributionSpec,
    pub image_type: ImageType,
}

/// The `distribution_spec` block of a build manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BuildDistributionSpec {
    pub description: String,
    pub providers: BTreeMap<Api, Vec<ProviderType>>,
}

impl BuildConfig {
    pub fn to_yaml(&self) -> Result<String, DistroError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_yaml(text: &str) -> Result<Self, DistroError> {
        Ok(serde_yaml::from_str(text)?)
    }
}
