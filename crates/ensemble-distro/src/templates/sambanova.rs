//! The SambaNova distribution: remote inference through SambaNova.AI,
//! everything else served by inline providers.

use std::collections::BTreeMap;

use ensemble_core::api::Api;
use serde_json::json;

use super::DistributionTemplate;
use crate::config::{
    BuildConfig, BuildDistributionSpec, ImageType, ModelConfig, ProviderInstance, RunConfig,
    ShieldConfig, MANIFEST_VERSION,
};
use crate::env::env_ref;
use crate::launch::{LaunchCommand, LaunchExample};
use crate::spec::{ApiBinding, DistributionSpec, EnvVarSpec, ModelEntry, ProviderType};

/// Template name, also used as provider instance id and image name.
pub const NAME: &str = "sambanova";

/// Published pre-built container image.
pub const CONTAINER_IMAGE: &str = "llamastack/distribution-sambanova";

/// Base URL the inference provider talks to.
pub const INFERENCE_URL: &str = "https://api.sambanova.ai/v1";

/// Environment variable carrying the API key.
pub const API_KEY_ENV: &str = "SAMBANOVA_API_KEY";

/// Default server port.
pub const DEFAULT_PORT: &str = "5001";

/// The documentation-facing spec.
///
/// Note the port variable drift carried over from the published docs: the
/// environment table declares `LLAMASTACK_PORT` while both launch examples
/// read `LLAMA_STACK_PORT`.  [`validate`](crate::validate) surfaces this as
/// two warnings rather than silently papering over it.
pub fn spec() -> DistributionSpec {
    DistributionSpec {
        name: NAME.to_string(),
        display_name: "SambaNova".to_string(),
        description: "Use SambaNova.AI for running LLM inference".to_string(),
        container_image: Some(CONTAINER_IMAGE.to_string()),
        bindings: vec![
            ApiBinding::new(
                Api::Agents,
                vec![ProviderType::inline("meta-reference")],
            ),
            ApiBinding::new(Api::Inference, vec![ProviderType::remote(NAME)]),
            ApiBinding::new(
                Api::Memory,
                vec![
                    ProviderType::inline("faiss"),
                    ProviderType::remote("chromadb"),
                    ProviderType::remote("pgvector"),
                ],
            ),
            ApiBinding::new(Api::Safety, vec![ProviderType::inline("llama-guard")]),
            ApiBinding::new(
                Api::Telemetry,
                vec![ProviderType::inline("meta-reference")],
            ),
        ],
        env: vec![
            EnvVarSpec::new(
                "LLAMASTACK_PORT",
                "Port for the Llama Stack distribution server",
                DEFAULT_PORT,
            ),
            EnvVarSpec::new(API_KEY_ENV, "SambaNova.AI API Key", ""),
        ],
        default_models: default_models(),
        prerequisites: vec![
            "Make sure you have access to a SambaNova API Key. You can get one by visiting \
             [SambaNova.ai](https://sambanova.ai/)."
                .to_string(),
        ],
        launch_overview: "You can do this via Conda (build code) or Docker which has a pre-built \
                          image."
            .to_string(),
        launch: vec![
            LaunchExample::new(
                "Via Docker",
                "This method allows you to get started quickly without having to build the \
                 distribution code.",
                LaunchCommand::Container {
                    image: CONTAINER_IMAGE.to_string(),
                    port_var: "LLAMA_STACK_PORT".to_string(),
                    port_default: DEFAULT_PORT.to_string(),
                    env_keys: vec![API_KEY_ENV.to_string()],
                },
            ),
            LaunchExample::new(
                "Via Conda",
                "",
                LaunchCommand::BuildAndRun {
                    template: NAME.to_string(),
                    image_type: ImageType::Conda,
                    config_path: "./run.yaml".to_string(),
                    port_var: "LLAMA_STACK_PORT".to_string(),
                    env_keys: vec![API_KEY_ENV.to_string()],
                },
            ),
        ],
    }
}

/// The models SambaNova serves out of the box.
///
/// Provider ids differ from the public aliases in two ways: the 405B
/// checkpoint drops the `-FP8` suffix, and the vision checkpoints drop the
/// `Meta-` prefix.
fn default_models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new(
            "meta-llama/Llama-3.1-8B-Instruct",
            "Meta-Llama-3.1-8B-Instruct",
        ),
        ModelEntry::new(
            "meta-llama/Llama-3.1-70B-Instruct",
            "Meta-Llama-3.1-70B-Instruct",
        ),
        ModelEntry::new(
            "meta-llama/Llama-3.1-405B-Instruct-FP8",
            "Meta-Llama-3.1-405B-Instruct",
        ),
        ModelEntry::new(
            "meta-llama/Llama-3.2-1B-Instruct",
            "Meta-Llama-3.2-1B-Instruct",
        ),
        ModelEntry::new(
            "meta-llama/Llama-3.2-3B-Instruct",
            "Meta-Llama-3.2-3B-Instruct",
        ),
        ModelEntry::new(
            "meta-llama/Llama-3.2-11B-Vision-Instruct",
            "Llama-3.2-11B-Vision-Instruct",
        ),
        ModelEntry::new(
            "meta-llama/Llama-3.2-90B-Vision-Instruct",
            "Llama-3.2-90B-Vision-Instruct",
        ),
    ]
}

/// The `run.yaml` manifest.
///
/// Of the three memory providers the distribution supports, only `faiss`
/// is instantiated by default; `run.yaml` edits can swap it out.
pub fn run_config(spec: &DistributionSpec) -> RunConfig {
    let providers = BTreeMap::from([
        (
            Api::Agents,
            vec![ProviderInstance::new(
                ProviderType::inline("meta-reference"),
                json!({}),
            )],
        ),
        (
            Api::Inference,
            vec![ProviderInstance::new(
                ProviderType::remote(NAME),
                json!({
                    "url": INFERENCE_URL,
                    "api_key": env_ref(API_KEY_ENV, None),
                }),
            )],
        ),
        (
            Api::Memory,
            vec![ProviderInstance::new(
                ProviderType::inline("faiss"),
                json!({}),
            )],
        ),
        (
            Api::Safety,
            vec![ProviderInstance::new(
                ProviderType::inline("llama-guard"),
                json!({}),
            )],
        ),
        (
            Api::Telemetry,
            vec![ProviderInstance::new(
                ProviderType::inline("meta-reference"),
                json!({}),
            )],
        ),
    ]);

    RunConfig {
        version: MANIFEST_VERSION.to_string(),
        image_name: NAME.to_string(),
        apis: Api::ALL.to_vec(),
        providers,
        models: spec
            .default_models
            .iter()
            .map(|model| ModelConfig {
                metadata: json!({}),
                model_id: model.model_id.clone(),
                provider_id: NAME.to_string(),
                provider_model_id: model.provider_model_id.clone(),
            })
            .collect(),
        shields: vec![ShieldConfig {
            shield_id: "meta-llama/Llama-Guard-3-8B".to_string(),
            provider_shield_id: None,
        }],
    }
}

/// The `build.yaml` manifest, listing every provider type the image has to
/// bundle (all three memory providers, not just the default one).
pub fn build_config(spec: &DistributionSpec) -> BuildConfig {
    BuildConfig {
        name: NAME.to_string(),
        distribution_spec: BuildDistributionSpec {
            description: spec.description.clone(),
            providers: spec
                .bindings
                .iter()
                .map(|binding| (binding.api, binding.providers.clone()))
                .collect(),
        },
        image_type: ImageType::Conda,
    }
}

/// Assemble the complete template.
pub fn template() -> DistributionTemplate {
    let spec = spec();
    let run = run_config(&spec);
    let build = build_config(&spec);
    DistributionTemplate { spec, run, build }
}
