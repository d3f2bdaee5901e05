//! Model identifiers used throughout the **ensemble** workspace.
//!
//! The enum hierarchy keeps the *public* API blissfully simple while allowing
//! each provider crate to map the variants onto its own naming scheme.  As a
//! consequence you never have to type literal strings such as
//! `"Meta-Llama-3.1-8B-Instruct"` in your application code—pick an enum
//! variant instead and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. **Family-specific enum**
//!    Add the variant to the sub-enum (`LlamaModel`, …) together with its
//!    descriptor string.
//! 2. **Mapping layer**
//!    Update the mapping function in each provider crate
//!    (`ensemble-sambanova::model_map::provider_model_id`, etc.).
//! 3. **Compile-time safety**
//!    The compiler will tell you if you forgot to handle the new variant in
//!    `From<T> for Model` or in provider match statements.
//!
//! # Example
//!
//! ```rust
//! use ensemble_core::model::{LlamaModel, Model};
//! assert_eq!(Model::from(LlamaModel::Llama3_1_8BInstruct),
//!            Model::Llama(LlamaModel::Llama3_1_8BInstruct));
//! ```

use std::fmt::Display;

/// Universal identifier for an LLM model.
///
/// * `Llama` – Enumerated list of Llama-family models with well-known
///   descriptors.
/// * `Custom` – Any model name not yet covered by a dedicated enum.  Use this
///   for self-hosted or beta models; the string is handed to the backend
///   verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Llama-family models.
    Llama(LlamaModel),
    /// Backend-native model ID, passed through unchanged.
    Custom(String),
}

impl Model {
    pub fn custom(id: impl Into<String>) -> Self {
        Model::Custom(id.into())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Model::Llama(model) => f.write_str(model.descriptor()),
            Model::Custom(id) => f.write_str(id),
        }
    }
}

/// Llama-family models with a canonical public descriptor.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlamaModel {
    Llama3_1_8BInstruct,
    Llama3_1_70BInstruct,
    Llama3_1_405BInstruct,
    Llama3_2_1BInstruct,
    Llama3_2_3BInstruct,
    Llama3_2_11BVisionInstruct,
    Llama3_2_90BVisionInstruct,
    LlamaGuard3_8B,
}

impl LlamaModel {
    /// Every known Llama model, in release order.
    pub const ALL: [LlamaModel; 8] = [
        LlamaModel::Llama3_1_8BInstruct,
        LlamaModel::Llama3_1_70BInstruct,
        LlamaModel::Llama3_1_405BInstruct,
        LlamaModel::Llama3_2_1BInstruct,
        LlamaModel::Llama3_2_3BInstruct,
        LlamaModel::Llama3_2_11BVisionInstruct,
        LlamaModel::Llama3_2_90BVisionInstruct,
        LlamaModel::LlamaGuard3_8B,
    ];

    /// Canonical `meta-llama/…` descriptor under which the model is published.
    pub fn descriptor(&self) -> &'static str {
        match self {
            LlamaModel::Llama3_1_8BInstruct => "meta-llama/Llama-3.1-8B-Instruct",
            LlamaModel::Llama3_1_70BInstruct => "meta-llama/Llama-3.1-70B-Instruct",
            LlamaModel::Llama3_1_405BInstruct => "meta-llama/Llama-3.1-405B-Instruct-FP8",
            LlamaModel::Llama3_2_1BInstruct => "meta-llama/Llama-3.2-1B-Instruct",
            LlamaModel::Llama3_2_3BInstruct => "meta-llama/Llama-3.2-3B-Instruct",
            LlamaModel::Llama3_2_11BVisionInstruct => "meta-llama/Llama-3.2-11B-Vision-Instruct",
            LlamaModel::Llama3_2_90BVisionInstruct => "meta-llama/Llama-3.2-90B-Vision-Instruct",
            LlamaModel::LlamaGuard3_8B => "meta-llama/Llama-Guard-3-8B",
        }
    }

    /// Inverse of [`LlamaModel::descriptor`].  Returns `None` for unknown
    /// descriptors.
    pub fn from_descriptor(descriptor: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|model| model.descriptor() == descriptor)
    }
}

impl From<LlamaModel> for Model {
    fn from(val: LlamaModel) -> Self {
        Model::Llama(val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_round_trip() {
        for model in LlamaModel::ALL {
            assert_eq!(LlamaModel::from_descriptor(model.descriptor()), Some(model));
        }
        assert_eq!(LlamaModel::from_descriptor("meta-llama/Llama-2-7b"), None);
    }

    #[test]
    fn descriptors_are_unique() {
        for (i, a) in LlamaModel::ALL.iter().enumerate() {
            for b in &LlamaModel::ALL[i + 1..] {
                assert_ne!(a.descriptor(), b.descriptor());
            }
        }
    }

    #[test]
    fn display_uses_descriptor_or_raw_id() {
        assert_eq!(
            Model::from(LlamaModel::Llama3_1_8BInstruct).to_string(),
            "meta-llama/Llama-3.1-8B-Instruct"
        );
        assert_eq!(Model::custom("my-org/fine-tune").to_string(), "my-org/fine-tune");
    }
}
