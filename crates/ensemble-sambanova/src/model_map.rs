//! Translation from workspace [`Model`] identifiers to the model names the
//! SambaNova cloud serves.
//!
//! SambaNova publishes Llama models under their bare checkpoint names
//! (`Meta-Llama-3.1-8B-Instruct`) rather than the `meta-llama/…` descriptors
//! used publicly.  Note the quirk: the two Vision checkpoints carry **no**
//! `Meta-` prefix.

use std::borrow::Cow;

use ensemble_core::model::{LlamaModel, Model};

pub const META_LLAMA_3_1_8B_INSTRUCT: &str = "Meta-Llama-3.1-8B-Instruct";
pub const META_LLAMA_3_1_70B_INSTRUCT: &str = "Meta-Llama-3.1-70B-Instruct";
pub const META_LLAMA_3_1_405B_INSTRUCT: &str = "Meta-Llama-3.1-405B-Instruct";
pub const META_LLAMA_3_2_1B_INSTRUCT: &str = "Meta-Llama-3.2-1B-Instruct";
pub const META_LLAMA_3_2_3B_INSTRUCT: &str = "Meta-Llama-3.2-3B-Instruct";
pub const LLAMA_3_2_11B_VISION_INSTRUCT: &str = "Llama-3.2-11B-Vision-Instruct";
pub const LLAMA_3_2_90B_VISION_INSTRUCT: &str = "Llama-3.2-90B-Vision-Instruct";
pub const META_LLAMA_GUARD_3_8B: &str = "Meta-Llama-Guard-3-8B";

/// The name SambaNova serves `model` under, or `None` if the checkpoint is
/// not hosted there.
///
/// The match is deliberately exhaustive: adding a `LlamaModel` variant forces
/// a decision here.
pub fn provider_model_id(model: LlamaModel) -> Option<&'static str> {
    match model {
        LlamaModel::Llama3_1_8BInstruct => Some(META_LLAMA_3_1_8B_INSTRUCT),
        LlamaModel::Llama3_1_70BInstruct => Some(META_LLAMA_3_1_70B_INSTRUCT),
        LlamaModel::Llama3_1_405BInstruct => Some(META_LLAMA_3_1_405B_INSTRUCT),
        LlamaModel::Llama3_2_1BInstruct => Some(META_LLAMA_3_2_1B_INSTRUCT),
        LlamaModel::Llama3_2_3BInstruct => Some(META_LLAMA_3_2_3B_INSTRUCT),
        LlamaModel::Llama3_2_11BVisionInstruct => Some(LLAMA_3_2_11B_VISION_INSTRUCT),
        LlamaModel::Llama3_2_90BVisionInstruct => Some(LLAMA_3_2_90B_VISION_INSTRUCT),
        LlamaModel::LlamaGuard3_8B => Some(META_LLAMA_GUARD_3_8B),
    }
}

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(Cow::Owned(custom.clone())),
        Model::Llama(llama_model) => provider_model_id(*llama_model).map(Cow::Borrowed),
    }
}
