//! The Llama Guard 3 hazard taxonomy.
//!
//! Thirteen categories, identified on the wire by their short codes
//! (`S1`–`S13`).  The guard model is prompted with the full list and answers
//! with the codes of whatever it considers violated, so both directions of
//! the mapping live here.

/// One hazard category recognised by Llama Guard 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardCategory {
    ViolentCrimes,
    NonViolentCrimes,
    SexCrimes,
    ChildExploitation,
    Defamation,
    SpecializedAdvice,
    Privacy,
    IntellectualProperty,
    IndiscriminateWeapons,
    Hate,
    SelfHarm,
    SexualContent,
    Elections,
}

impl HazardCategory {
    /// Every category, in code order (`S1`..`S13`).
    pub const ALL: [HazardCategory; 13] = [
        HazardCategory::ViolentCrimes,
        HazardCategory::NonViolentCrimes,
        HazardCategory::SexCrimes,
        HazardCategory::ChildExploitation,
        HazardCategory::Defamation,
        HazardCategory::SpecializedAdvice,
        HazardCategory::Privacy,
        HazardCategory::IntellectualProperty,
        HazardCategory::IndiscriminateWeapons,
        HazardCategory::Hate,
        HazardCategory::SelfHarm,
        HazardCategory::SexualContent,
        HazardCategory::Elections,
    ];

    /// Short code the guard model uses in its verdict.
    pub fn code(&self) -> &'static str {
        match self {
            HazardCategory::ViolentCrimes => "S1",
            HazardCategory::NonViolentCrimes => "S2",
            HazardCategory::SexCrimes => "S3",
            HazardCategory::ChildExploitation => "S4",
            HazardCategory::Defamation => "S5",
            HazardCategory::SpecializedAdvice => "S6",
            HazardCategory::Privacy => "S7",
            HazardCategory::IntellectualProperty => "S8",
            HazardCategory::IndiscriminateWeapons => "S9",
            HazardCategory::Hate => "S10",
            HazardCategory::SelfHarm => "S11",
            HazardCategory::SexualContent => "S12",
            HazardCategory::Elections => "S13",
        }
    }

    /// Human-readable name as listed in the policy prompt.
    pub fn title(&self) -> &'static str {
        match self {
            HazardCategory::ViolentCrimes => "Violent Crimes",
            HazardCategory::NonViolentCrimes => "Non-Violent Crimes",
            HazardCategory::SexCrimes => "Sex Crimes",
            HazardCategory::ChildExploitation => "Child Exploitation",
            HazardCategory::Defamation => "Defamation",
            HazardCategory::SpecializedAdvice => "Specialized Advice",
            HazardCategory::Privacy => "Privacy",
            HazardCategory::IntellectualProperty => "Intellectual Property",
            HazardCategory::IndiscriminateWeapons => "Indiscriminate Weapons",
            HazardCategory::Hate => "Hate",
            HazardCategory::SelfHarm => "Self-Harm",
            HazardCategory::SexualContent => "Sexual Content",
            HazardCategory::Elections => "Elections",
        }
    }

    /// Inverse of [`HazardCategory::code`].  Returns `None` for codes outside
    /// the taxonomy (the guard model occasionally hallucinates one).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.code() == code)
    }
}
