use ensemble_core::error::EnsembleError;

/// Failure modes specific to running a guard model as a shield.
///
/// All of these mean the shield itself broke, not that content was unsafe.
/// They convert into [`EnsembleError::Backend`] so callers see them as hard
/// errors rather than as screening outcomes.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("guard model returned an empty verdict")]
    EmptyVerdict,

    #[error("guard model returned an unrecognised verdict: `{0}`")]
    UnrecognisedVerdict(String),

    #[error("guard model flagged the conversation but named no category")]
    MissingCategories,
}

impl From<GuardError> for EnsembleError {
    fn from(value: GuardError) -> Self {
        EnsembleError::Backend(Box::new(value))
    }
}
