//! Capability surfaces a distribution can expose.
//!
//! Every provider in a distribution is bound to exactly one of these
//! surfaces.  The enum is deliberately closed: manifests, documentation
//! tables and provider routing all match on it, so the compiler points at
//! every site that needs attention when a surface is added.
//!
//! Variants are declared in alphabetical order.  `BTreeMap<Api, _>` keys
//! therefore iterate in the same order the rendered documentation lists
//! them, without any extra sorting step.

use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One capability surface of a distribution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Api {
    /// Multi-step orchestration on top of inference and memory.
    Agents,
    /// Chat completion, both buffered and streamed.
    Inference,
    /// Vector stores used for retrieval.
    Memory,
    /// Content moderation shields.
    Safety,
    /// Usage and trace collection.
    Telemetry,
}

impl Api {
    /// All surfaces, in declaration (= alphabetical) order.
    pub const ALL: [Api; 5] = [
        Api::Agents,
        Api::Inference,
        Api::Memory,
        Api::Safety,
        Api::Telemetry,
    ];

    /// Canonical lowercase name as it appears in manifests and tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Api::Agents => "agents",
            Api::Inference => "inference",
            Api::Memory => "memory",
            Api::Safety => "safety",
            Api::Telemetry => "telemetry",
        }
    }

    /// Inverse of [`Api::as_str`].  Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|api| api.as_str() == name)
    }
}

impl Display for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for api in Api::ALL {
            assert_eq!(Api::parse(api.as_str()), Some(api));
        }
        assert_eq!(Api::parse("routing"), None);
    }

    #[test]
    fn declaration_order_is_alphabetical() {
        let mut names: Vec<&str> = Api::ALL.iter().map(Api::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, Api::ALL.iter().map(Api::as_str).collect::<Vec<_>>());
    }
}
