//! Consistency checks for distribution specs.
//!
//! [`validate`] never fails hard: it returns a list of [`Finding`]s so a
//! caller can decide whether to abort on [`Severity::Error`], print
//! [`Severity::Warning`]s, or both.  Warnings deliberately cover the drift
//! that creeps into hand-maintained manifests, such as a launch command
//! referencing an environment variable the spec never declares.

use std::collections::BTreeSet;
use std::fmt;

use ensemble_core::api::Api;

use crate::spec::DistributionSpec;

/// How serious a [`Finding`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One observation produced by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Check `spec` for internal inconsistencies.
///
/// Returned findings are ordered by the section they concern: provider
/// bindings first, then environment variables, models, launch examples.
pub fn validate(spec: &DistributionSpec) -> Vec<Finding> {
    let mut findings = Vec::new();

    let mut bound_apis = BTreeSet::new();
    for binding in &spec.bindings {
        if !bound_apis.insert(binding.api) {
            findings.push(Finding::error(format!(
                "api `{}` is bound more than once",
                binding.api
            )));
        }
        if binding.providers.is_empty() {
            findings.push(Finding::error(format!(
                "api `{}` is bound without any providers",
                binding.api
            )));
        }
    }

    let mut declared_env = BTreeSet::new();
    for var in &spec.env {
        if !declared_env.insert(var.name.as_str()) {
            findings.push(Finding::error(format!(
                "environment variable `{}` is declared more than once",
                var.name
            )));
        }
    }

    let mut model_ids = BTreeSet::new();
    for model in &spec.default_models {
        if !model_ids.insert(model.model_id.as_str()) {
            findings.push(Finding::error(format!(
                "model `{}` is listed more than once",
                model.model_id
            )));
        }
    }
    if !spec.default_models.is_empty() && spec.binding(Api::Inference).is_none() {
        findings.push(Finding::warning(
            "default models are listed but no inference provider is bound",
        ));
    }

    for example in &spec.launch {
        if example.command.port_var().is_empty() {
            findings.push(Finding::error(format!(
                "launch example `{}` has an empty port variable",
                example.title
            )));
            continue;
        }
        for referenced in example.command.referenced_vars() {
            if !declared_env.contains(referenced) {
                findings.push(Finding::warning(format!(
                    "launch example `{}` references `{}`, which is not a declared environment variable",
                    example.title, referenced
                )));
            }
        }
    }

    findings
}

/// `true` when [`validate`] reports no [`Severity::Error`] findings.
pub fn is_valid(spec: &DistributionSpec) -> bool {
    !validate(spec).iter().any(Finding::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::{LaunchCommand, LaunchExample};
    use crate::spec::{ApiBinding, EnvVarSpec, ModelEntry, ProviderType};

    fn minimal_spec() -> DistributionSpec {
        DistributionSpec {
            name: "testbed".to_string(),
            display_name: "Testbed".to_string(),
            description: "A spec for tests".to_string(),
            container_image: None,
            bindings: vec![ApiBinding {
                api: Api::Inference,
                providers: vec![ProviderType::remote("testbed")],
            }],
            env: vec![EnvVarSpec {
                name: "TESTBED_PORT".to_string(),
                description: "Port for the server".to_string(),
                default: "5001".to_string(),
            }],
            default_models: vec![ModelEntry {
                model_id: "meta-llama/Llama-3.1-8B-Instruct".to_string(),
                provider_model_id: "Meta-Llama-3.1-8B-Instruct".to_string(),
            }],
            prerequisites: Vec::new(),
            launch_overview: String::new(),
            launch: vec![LaunchExample {
                title: "Via Docker".to_string(),
                intro: String::new(),
                command: LaunchCommand::Container {
                    image: "testbed/image".to_string(),
                    port_var: "TESTBED_PORT".to_string(),
                    port_default: "5001".to_string(),
                    env_keys: Vec::new(),
                },
            }],
        }
    }

    #[test]
    fn consistent_spec_has_no_findings() {
        assert_eq!(validate(&minimal_spec()), Vec::new());
        assert!(is_valid(&minimal_spec()));
    }

    #[test]
    fn duplicate_api_binding_is_an_error() {
        let mut spec = minimal_spec();
        spec.bindings.push(ApiBinding {
            api: Api::Inference,
            providers: vec![ProviderType::inline("other")],
        });

        let findings = validate(&spec);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_error());
        assert!(findings[0].message.contains("bound more than once"));
        assert!(!is_valid(&spec));
    }

    #[test]
    fn binding_without_providers_is_an_error() {
        let mut spec = minimal_spec();
        spec.bindings.push(ApiBinding {
            api: Api::Safety,
            providers: Vec::new(),
        });

        assert!(!is_valid(&spec));
    }

    #[test]
    fn duplicate_model_is_an_error() {
        let mut spec = minimal_spec();
        spec.default_models.push(spec.default_models[0].clone());

        let findings = validate(&spec);
        assert!(findings.iter().any(|finding| {
            finding.is_error() && finding.message.contains("listed more than once")
        }));
    }

    #[test]
    fn undeclared_launch_variable_is_a_warning() {
        let mut spec = minimal_spec();
        spec.launch = vec![LaunchExample {
            title: "Via Docker".to_string(),
            intro: String::new(),
            command: LaunchCommand::Container {
                image: "testbed/image".to_string(),
                port_var: "OTHER_PORT".to_string(),
                port_default: "5001".to_string(),
                env_keys: vec!["TESTBED_API_KEY".to_string()],
            },
        }];

        let findings = validate(&spec);
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|finding| !finding.is_error()));
        assert!(findings[0].message.contains("OTHER_PORT"));
        assert!(findings[1].message.contains("TESTBED_API_KEY"));
        // Warnings do not make the spec invalid.
        assert!(is_valid(&spec));
    }

    #[test]
    fn models_without_inference_binding_is_a_warning() {
        let mut spec = minimal_spec();
        spec.bindings = vec![ApiBinding {
            api: Api::Safety,
            providers: vec![ProviderType::inline("llama-guard")],
        }];

        let findings = validate(&spec);
        assert!(findings.iter().any(|finding| {
            finding.severity == Severity::Warning
                && finding.message.contains("no inference provider")
        }));
    }

    #[test]
    fn empty_port_variable_is_an_error() {
        let mut spec = minimal_spec();
        spec.launch = vec![LaunchExample {
            title: "Via Docker".to_string(),
            intro: String::new(),
            command: LaunchCommand::Container {
                image: "testbed/image".to_string(),
                port_var: String::new(),
                port_default: "5001".to_string(),
                env_keys: Vec::new(),
            },
        }];

        assert!(!is_valid(&spec));
    }

    #[test]
    fn findings_render_with_severity_prefix() {
        let finding = Finding::error("something is off");
        assert_eq!(finding.to_string(), "error: something is off");
    }
}
