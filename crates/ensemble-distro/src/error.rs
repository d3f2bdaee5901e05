use thiserror::Error;

/// Failure modes of template lookup, manifest handling and environment
/// resolution.
#[derive(Debug, Error)]
pub enum DistroError {
    /// [`templates::get`](crate::templates::get) was asked for a name that is
    /// not shipped with this crate.
    #[error("unknown distribution template `{name}`")]
    UnknownTemplate { name: String },

    /// An `${env.NAME}` reference could not be satisfied: the variable is
    /// unset and the reference carries no default.
    #[error("environment variable `{name}` is not set and has no default")]
    UnresolvedEnv { name: String },

    /// A `${env.…}` reference is syntactically broken, e.g. the closing
    /// brace is missing.
    #[error("malformed environment reference in `{raw}`")]
    MalformedEnvRef { raw: String },

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
