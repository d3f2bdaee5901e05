//! Built-in distribution templates.
//!
//! A template bundles everything one distribution ships with: the
//! documentation-facing [`DistributionSpec`] plus the `run.yaml` and
//! `build.yaml` manifests derived from it.  Templates are assembled in
//! code so the three artefacts cannot drift apart.

use crate::config::{BuildConfig, RunConfig};
use crate::error::DistroError;
use crate::spec::DistributionSpec;

pub mod sambanova;

/// One materialised distribution.
#[derive(Debug, Clone)]
pub struct DistributionTemplate {
    pub spec: DistributionSpec,
    pub run: RunConfig,
    pub build: BuildConfig,
}

/// Names of every built-in template, in registry order.
pub fn names() -> &'static [&'static str] {
    &[sambanova::NAME]
}

/// Look a built-in template up by name.
pub fn get(name: &str) -> Result<DistributionTemplate, DistroError> {
    match name {
        sambanova::NAME => Ok(sambanova::template()),
        _ => Err(DistroError::UnknownTemplate {
            name: name.to_string(),
        }),
    }
}
