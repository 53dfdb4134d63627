use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How template comparison treats letter case.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CasePolicy {
    /// `Index.html` and `index.html` are different names.
    #[default]
    Sensitive,
    /// Letter case is ignored when comparing names.
    Insensitive,
}

impl CasePolicy {
    /// Returns `true` for [`CasePolicy::Insensitive`].
    #[must_use]
    pub const fn is_insensitive(self) -> bool {
        matches!(self, Self::Insensitive)
    }

    /// Returns the configuration keyword for this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sensitive => "sensitive",
            Self::Insensitive => "insensitive",
        }
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a case policy keyword is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown case policy '{0}' (expected 'sensitive' or 'insensitive')")]
pub struct ParseCasePolicyError(String);

impl FromStr for CasePolicy {
    type Err = ParseCasePolicyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_lowercase().as_str() {
            "sensitive" | "case-sensitive" | "exact" => Ok(Self::Sensitive),
            "insensitive" | "case-insensitive" | "ignore" | "fold" => Ok(Self::Insensitive),
            _ => Err(ParseCasePolicyError(text.to_owned())),
        }
    }
}
