//! Public model aliases and their resolution.
//!
//! A distribution advertises models under stable public aliases
//! (`meta-llama/Llama-3.1-8B-Instruct`) while each backend speaks its own
//! naming scheme.  The [`ModelRegistry`] owns that first hop: alias in,
//! [`Model`] out.  The second hop—[`Model`] to the provider's wire name—
//! happens inside the provider crate, keeping the registry backend-agnostic.

use crate::error::{EnsembleError, Result};
use crate::model::Model;

/// One alias → model pair held by a [`ModelRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub alias: String,
    pub model: Model,
}

/// Alias table consulted by the stack client before every chat request.
///
/// Aliases are unique; registering the same alias twice is rejected so a
/// distribution can never silently shadow one model with another.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    entries: Vec<RegistryEntry>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `(alias, model)` pairs, rejecting duplicates.
    pub fn with_entries(
        pairs: impl IntoIterator<Item = (String, Model)>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for (alias, model) in pairs {
            registry.register(alias, model)?;
        }
        Ok(registry)
    }

    /// Adds a new alias.  Fails with [`EnsembleError::DuplicateModel`] if the
    /// alias is already taken.
    pub fn register(&mut self, alias: impl Into<String>, model: Model) -> Result<()> {
        let alias = alias.into();
        if self.resolve(&alias).is_some() {
            return Err(EnsembleError::DuplicateModel { alias });
        }
        self.entries.push(RegistryEntry { alias, model });
        Ok(())
    }

    /// Looks up an alias.  Matching is exact; no normalisation is applied.
    pub fn resolve(&self, alias: &str) -> Option<&Model> {
        self.entries
            .iter()
            .find(|entry| entry.alias == alias)
            .map(|entry| &entry.model)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.alias.as_str())
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LlamaModel;

    #[test]
    fn register_and_resolve() {
        let mut registry = ModelRegistry::new();
        registry
            .register("meta-llama/Llama-3.1-8B-Instruct", LlamaModel::Llama3_1_8BInstruct.into())
            .unwrap();

        assert_eq!(
            registry.resolve("meta-llama/Llama-3.1-8B-Instruct"),
            Some(&Model::Llama(LlamaModel::Llama3_1_8BInstruct))
        );
        assert_eq!(registry.resolve("meta-llama/unknown"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        let mut registry = ModelRegistry::new();
        registry.register("alias", Model::custom("a")).unwrap();

        let err = registry.register("alias", Model::custom("b")).unwrap_err();
        assert!(matches!(err, EnsembleError::DuplicateModel { alias } if alias == "alias"));
    }

    #[test]
    fn with_entries_rejects_duplicates() {
        let result = ModelRegistry::with_entries([
            ("a".to_owned(), Model::custom("x")),
            ("a".to_owned(), Model::custom("y")),
        ]);
        assert!(result.is_err());
    }
}
